//! Input validation shared by every calculation.

use tracing::warn;

use crate::error::{InvalidArgument, Result};

/// Check that a series is well formed for the given window.
///
/// Checks run in a fixed order and the first failure is returned:
/// negative window bounds, empty series, window not enclosing the samples,
/// length mismatches, and finally timestamp ordering. Equal consecutive
/// timestamps are allowed.
pub fn validate(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
    exceptions: Option<&[bool]>,
) -> Result<()> {
    let result = check(start_time, end_time, timestamps, values, exceptions);
    if let Err(err) = &result {
        warn!(%err, samples = timestamps.len(), "rejecting uptime series");
    }
    result
}

fn check(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
    exceptions: Option<&[bool]>,
) -> Result<()> {
    if start_time < 0 || end_time < 0 {
        return Err(InvalidArgument::NegativeWindow {
            start: start_time,
            end: end_time,
        });
    }

    let (Some(&first), Some(&last)) = (timestamps.first(), timestamps.last()) else {
        return Err(InvalidArgument::EmptySeries);
    };
    if start_time > first {
        return Err(InvalidArgument::StartAfterFirstSample {
            start: start_time,
            first,
        });
    }
    if end_time < last {
        return Err(InvalidArgument::EndBeforeLastSample {
            end: end_time,
            last,
        });
    }

    if timestamps.len() != values.len() {
        return Err(InvalidArgument::ValueLengthMismatch {
            timestamps: timestamps.len(),
            values: values.len(),
        });
    }
    if let Some(exceptions) = exceptions {
        if exceptions.len() != timestamps.len() {
            return Err(InvalidArgument::ExceptionLengthMismatch {
                timestamps: timestamps.len(),
                exceptions: exceptions.len(),
            });
        }
    }

    if let Some(pos) = timestamps.windows(2).position(|w| w[1] < w[0]) {
        return Err(InvalidArgument::UnorderedTimestamps { index: pos + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_series() {
        assert!(validate(0, 30, &[10, 20, 30], &[1, 2, 3], None).is_ok());
        let exceptions = [false, true, false];
        assert!(validate(0, 30, &[10, 20, 30], &[1, 2, 3], Some(&exceptions[..])).is_ok());
    }

    #[test]
    fn test_accepts_equal_timestamps() {
        assert!(validate(5, 5, &[5, 5, 5], &[0, 0, 0], None).is_ok());
    }

    #[test]
    fn test_rejects_negative_window() {
        assert_eq!(
            validate(-1, 10, &[5], &[1], None),
            Err(InvalidArgument::NegativeWindow { start: -1, end: 10 })
        );
        assert!(matches!(
            validate(0, -10, &[5], &[1], None),
            Err(InvalidArgument::NegativeWindow { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_series() {
        assert_eq!(validate(0, 10, &[], &[], None), Err(InvalidArgument::EmptySeries));
    }

    #[test]
    fn test_rejects_window_not_enclosing_samples() {
        assert_eq!(
            validate(6, 10, &[5, 7], &[1, 2], None),
            Err(InvalidArgument::StartAfterFirstSample { start: 6, first: 5 })
        );
        assert_eq!(
            validate(0, 6, &[5, 7], &[1, 2], None),
            Err(InvalidArgument::EndBeforeLastSample { end: 6, last: 7 })
        );
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert_eq!(
            validate(0, 10, &[1, 2, 3], &[1, 2], None),
            Err(InvalidArgument::ValueLengthMismatch {
                timestamps: 3,
                values: 2
            })
        );
        assert_eq!(
            validate(0, 10, &[1, 2], &[1, 2], Some(&[true][..])),
            Err(InvalidArgument::ExceptionLengthMismatch {
                timestamps: 2,
                exceptions: 1
            })
        );
    }

    #[test]
    fn test_rejects_unordered_timestamps() {
        assert_eq!(
            validate(0, 10, &[5, 3], &[1, 1], None),
            Err(InvalidArgument::UnorderedTimestamps { index: 1 })
        );
        assert_eq!(
            validate(0, 10, &[1, 2, 4, 3, 5], &[0; 5], None),
            Err(InvalidArgument::UnorderedTimestamps { index: 3 })
        );
    }

    #[test]
    fn test_first_failing_check_wins() {
        // Negative start is reported before the empty series.
        assert!(matches!(
            validate(-1, 10, &[], &[], None),
            Err(InvalidArgument::NegativeWindow { .. })
        ));
    }
}
