//! Per-sample up/down/open classification.

use slawatch_types::UptimeState;

use super::intervals::Intervals;
use super::policy::open_tail;

/// Label each sample from its spread interval.
///
/// A sample is up when its interval counted any uptime and down otherwise;
/// samples in the trailing run without a positive reading are open.
pub(crate) fn classify(intervals: &Intervals, values: &[i64]) -> Vec<UptimeState> {
    let mut states: Vec<UptimeState> = intervals
        .counted
        .iter()
        .take(values.len())
        .map(|&counted| {
            if counted > 0 {
                UptimeState::Up
            } else {
                UptimeState::Down
            }
        })
        .collect();

    for index in open_tail(values) {
        states[index] = UptimeState::Open;
    }
    states
}
