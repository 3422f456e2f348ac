//! General time utility functions

use std::time::Duration;

/// Number of nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Convert a chrono duration into a number of seconds, or `None` if overflow
pub fn duration_to_seconds(duration: chrono::Duration) -> Option<f64> {
    duration
        .num_nanoseconds()
        .map(|ns| ns as f64 / NANOS_PER_SECOND as f64)
}

/// Build a period from a number of seconds, or `None` if the value is not a finite positive
/// number.
pub fn period_from_seconds(period_s: f64) -> Option<Duration> {
    if period_s.is_finite() && period_s > 0.0 {
        Some(Duration::from_secs_f64(period_s))
    }
    else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duration_to_seconds() {
        assert_eq!(
            duration_to_seconds(chrono::Duration::milliseconds(1500)),
            Some(1.5)
        );
        assert_eq!(duration_to_seconds(chrono::Duration::max_value()), None);
    }

    #[test]
    fn test_period_from_seconds() {
        assert_eq!(period_from_seconds(0.5), Some(Duration::from_millis(500)));
        assert_eq!(period_from_seconds(0.0), None);
        assert_eq!(period_from_seconds(-1.0), None);
        assert_eq!(period_from_seconds(f64::NAN), None);
    }
}
