//! Interval reconstruction from cumulative counter samples.
//!
//! Each sample closes one interval: the first runs from the window start to
//! the first timestamp, every later one from the previous timestamp to its
//! own. An interval carries its wall-clock length and the portion of it that
//! counts as up.

use tracing::{debug, trace};

/// Parallel per-interval wall-clock lengths and counted uptime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intervals {
    /// Length of each interval.
    pub delta_time: Vec<i64>,
    /// Portion of each interval counted as available.
    pub counted: Vec<i64>,
}

impl Intervals {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            delta_time: Vec::with_capacity(capacity),
            counted: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, delta_time: i64, counted: i64) {
        self.delta_time.push(delta_time);
        self.counted.push(counted);
    }

    /// Presence reconstruction: an interval counts in full when its closing
    /// sample carries any positive reading, and not at all otherwise.
    pub fn presence(start_time: i64, timestamps: &[i64], values: &[i64]) -> Self {
        let mut intervals = Self::with_capacity(timestamps.len() + 1);
        let mut previous = start_time;
        for (&timestamp, &value) in timestamps.iter().zip(values) {
            let delta = timestamp.saturating_sub(previous);
            intervals.push(delta, if value > 0 { delta } else { 0 });
            previous = timestamp;
        }
        intervals
    }

    /// Spread reconstruction: counted uptime is the counter growth over each
    /// interval, with growth that exceeds an interval's length pushed back
    /// into the intervals before it.
    ///
    /// A counter that drops or stays flat contributes nothing to the interval
    /// it closes. Afterwards every interval satisfies
    /// `0 <= counted <= delta_time`.
    pub fn spread(start_time: i64, timestamps: &[i64], values: &[i64]) -> Self {
        let mut intervals = Self::with_capacity(timestamps.len() + 1);
        let mut previous: Option<(i64, i64)> = None;

        for (index, (&timestamp, &value)) in timestamps.iter().zip(values).enumerate() {
            match previous {
                None => {
                    let delta = timestamp.saturating_sub(start_time);
                    let counted = if value <= 0 { 0 } else { value.min(delta) };
                    intervals.push(delta, counted);
                }
                Some((prev_timestamp, prev_value)) => {
                    let delta = timestamp.saturating_sub(prev_timestamp);
                    let growth = value.saturating_sub(prev_value);
                    if growth < 0 {
                        debug!(index, from = prev_value, to = value, "counter reset");
                    }
                    intervals.push(delta, growth.max(0));
                }
            }
            previous = Some((timestamp, value));
        }

        intervals.redistribute();
        intervals
    }

    /// Move counted uptime that overflows its interval into earlier
    /// intervals. Whatever still overflows the first interval is dropped.
    fn redistribute(&mut self) {
        for index in 0..self.len() {
            if self.counted[index] <= self.delta_time[index] {
                continue;
            }
            debug!(
                index,
                excess = self.counted[index] - self.delta_time[index],
                "spreading counter growth backward"
            );

            let mut j = index;
            while self.counted[j] > self.delta_time[j] {
                if j == 0 {
                    self.counted[0] = self.delta_time[0];
                    break;
                }
                self.counted[j - 1] = self.counted[j] - self.delta_time[j];
                self.counted[j] = self.delta_time[j];
                j -= 1;
            }
        }
    }

    /// Append the unobserved span between the last sample and the window
    /// end as an uncounted interval.
    pub fn close(&mut self, end_time: i64, last_timestamp: i64) {
        let delta = end_time.saturating_sub(last_timestamp);
        if delta > 0 {
            trace!(delta, "closing window with uncounted tail");
            self.push(delta, 0);
        }
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.delta_time.len()
    }

    /// Check if there are no intervals.
    pub fn is_empty(&self) -> bool {
        self.delta_time.is_empty()
    }

    /// Total wall-clock time covered.
    pub fn total_time(&self) -> i128 {
        self.delta_time.iter().map(|&d| i128::from(d)).sum()
    }

    /// Total counted uptime.
    pub fn total_counted(&self) -> i128 {
        self.counted.iter().map(|&c| i128::from(c)).sum()
    }

    /// Counted uptime as a fraction of total time.
    ///
    /// Returns 0.0 when the intervals cover no time at all.
    pub fn ratio(&self) -> f64 {
        let total = self.total_time();
        if total <= 0 {
            return 0.0;
        }
        self.total_counted() as f64 / total as f64
    }

    /// Check that every interval satisfies `0 <= counted <= delta_time`.
    pub fn is_bounded(&self) -> bool {
        self.delta_time
            .iter()
            .zip(&self.counted)
            .all(|(&delta, &counted)| 0 <= counted && counted <= delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_counts_whole_interval() {
        let intervals = Intervals::presence(0, &[10, 25, 30], &[0, 7, -1]);
        assert_eq!(intervals.delta_time, vec![10, 15, 5]);
        assert_eq!(intervals.counted, vec![0, 15, 0]);
    }

    #[test]
    fn test_spread_first_sample_is_capped() {
        let intervals = Intervals::spread(0, &[10], &[25]);
        assert_eq!(intervals.counted, vec![10]);

        let intervals = Intervals::spread(0, &[10], &[4]);
        assert_eq!(intervals.counted, vec![4]);
    }

    #[test]
    fn test_spread_suppresses_resets() {
        let intervals = Intervals::spread(0, &[10, 20, 30, 40], &[5, 15, 3, 13]);
        assert_eq!(intervals.delta_time, vec![10, 10, 10, 10]);
        assert_eq!(intervals.counted, vec![5, 10, 0, 10]);
    }

    #[test]
    fn test_spread_pushes_excess_backward() {
        let intervals = Intervals::spread(0, &[10, 20, 30, 40], &[0, 0, 0, 35]);
        assert_eq!(intervals.counted, vec![5, 10, 10, 10]);
        assert!(intervals.is_bounded());
    }

    #[test]
    fn test_spread_drops_excess_before_window_start() {
        let intervals = Intervals::spread(0, &[10, 20, 30, 40], &[0, 0, 0, 100]);
        assert_eq!(intervals.counted, vec![10, 10, 10, 10]);
        assert_eq!(intervals.total_counted(), 40);
    }

    #[test]
    fn test_spread_stops_once_excess_is_absorbed() {
        let intervals = Intervals::spread(0, &[10, 20, 30, 40], &[8, 0, 0, 25]);
        assert_eq!(intervals.counted, vec![8, 5, 10, 10]);
    }

    #[test]
    fn test_close_appends_uncounted_tail() {
        let mut intervals = Intervals::presence(0, &[10, 25, 30], &[0, 7, 1]);
        intervals.close(40, 30);
        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals.delta_time[3], 10);
        assert_eq!(intervals.counted[3], 0);
        assert_eq!(intervals.ratio(), 20.0 / 40.0);

        // No tail when the last sample sits on the window end.
        let mut intervals = Intervals::presence(0, &[10], &[1]);
        intervals.close(10, 10);
        assert_eq!(intervals.len(), 1);
    }

    #[test]
    fn test_ratio_of_empty_span_is_zero() {
        let intervals = Intervals::spread(7, &[7], &[3]);
        assert_eq!(intervals.delta_time, vec![0]);
        assert_eq!(intervals.ratio(), 0.0);
        assert_eq!(Intervals::default().ratio(), 0.0);
    }
}
