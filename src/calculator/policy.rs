//! Device-aware accounting on top of spread intervals.

use std::ops::Range;

use super::intervals::Intervals;

/// Indices of the trailing run of samples without a positive reading.
///
/// Nothing after the last positive reading shows whether the device came
/// back, so this run is left open.
pub(crate) fn open_tail(values: &[i64]) -> Range<usize> {
    let start = values.iter().rposition(|&v| v > 0).map_or(0, |i| i + 1);
    start..values.len()
}

/// Apply device-aware accounting to spread intervals in place.
///
/// Samples before the first positive reading are not yet observed and count
/// nothing. After that an interval is charged as down only when the device
/// was up (the counter grew across it) while its reading was missing;
/// every other interval counts in full. The open tail is zeroed last.
///
/// Exception samples count in full and are never zeroed. They are skipped
/// before the observation check, so a positive reading on one does not end
/// the unobserved prefix.
pub(crate) fn charge_connectivity_loss(
    intervals: &mut Intervals,
    values: &[i64],
    exceptions: Option<&[bool]>,
) {
    let is_exception = |index: usize| exceptions.is_some_and(|flags| flags[index]);

    let mut observed = false;
    for (index, &value) in values.iter().enumerate() {
        let delta = intervals.delta_time[index];
        let counted = &mut intervals.counted[index];

        if is_exception(index) {
            *counted = delta;
            continue;
        }

        observed |= value > 0;
        *counted = if !observed || (value <= 0 && *counted > 0) {
            0
        } else {
            delta
        };
    }

    for index in open_tail(values) {
        if !is_exception(index) {
            intervals.counted[index] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tail() {
        assert_eq!(open_tail(&[1, 2, 0, -1]), 2..4);
        assert_eq!(open_tail(&[1, 2, 3]), 3..3);
        assert_eq!(open_tail(&[0, 0]), 0..2);
        assert_eq!(open_tail(&[]), 0..0);
    }

    #[test]
    fn test_unobserved_prefix_counts_nothing() {
        let values = [0, 0, 5, 15];
        let mut intervals = Intervals::spread(0, &[10, 20, 30, 40], &values);
        charge_connectivity_loss(&mut intervals, &values, None);
        assert_eq!(intervals.counted, vec![0, 0, 10, 10]);
    }

    #[test]
    fn test_missing_reading_while_device_up_is_down() {
        // The jump to 30 at t=40 spreads back over the missing reading at t=30.
        let values = [10, 20, 0, 30];
        let mut intervals = Intervals::spread(0, &[10, 20, 30, 40], &values);
        assert_eq!(intervals.counted, vec![10, 10, 10, 10]);

        charge_connectivity_loss(&mut intervals, &values, None);
        assert_eq!(intervals.counted, vec![10, 10, 0, 10]);
    }

    #[test]
    fn test_missing_reading_while_device_down_counts() {
        // Restart after the gap: the counter never covered t=20..30.
        let values = [10, 20, 0, 5];
        let mut intervals = Intervals::spread(0, &[10, 20, 30, 40], &values);
        charge_connectivity_loss(&mut intervals, &values, None);
        assert_eq!(intervals.counted, vec![10, 10, 10, 10]);
    }

    #[test]
    fn test_flat_counter_counts_in_full() {
        let values = [10, 10, 10];
        let mut intervals = Intervals::spread(0, &[10, 20, 30], &values);
        charge_connectivity_loss(&mut intervals, &values, None);
        assert_eq!(intervals.counted, vec![10, 10, 10]);
    }

    #[test]
    fn test_open_tail_is_zeroed() {
        let values = [10, 20, 0, 0];
        let mut intervals = Intervals::spread(0, &[10, 20, 30, 40], &values);
        charge_connectivity_loss(&mut intervals, &values, None);
        assert_eq!(intervals.counted, vec![10, 10, 0, 0]);
    }

    #[test]
    fn test_exceptions_count_and_survive_open_tail() {
        let values = [10, 20, 0, 0, 0];
        let exceptions = [false, false, false, true, false];
        let mut intervals = Intervals::spread(0, &[10, 20, 30, 40, 50], &values);
        charge_connectivity_loss(&mut intervals, &values, Some(&exceptions[..]));
        assert_eq!(intervals.counted, vec![10, 10, 0, 10, 0]);
    }

    #[test]
    fn test_exception_in_unobserved_prefix_counts() {
        let values = [0, 0, 5];
        let exceptions = [true, false, false];
        let mut intervals = Intervals::spread(0, &[10, 20, 30], &values);
        charge_connectivity_loss(&mut intervals, &values, Some(&exceptions[..]));
        assert_eq!(intervals.counted, vec![10, 0, 10]);
    }

    #[test]
    fn test_positive_exception_leaves_prefix_unobserved() {
        let values = [5, 0, 7];
        let exceptions = [true, false, false];
        let mut intervals = Intervals::spread(0, &[10, 20, 30], &values);
        charge_connectivity_loss(&mut intervals, &values, Some(&exceptions[..]));
        assert_eq!(intervals.counted, vec![10, 0, 10]);
    }
}
