//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Clamp a value into the range `[min, max]`.
///
/// A NaN value is returned unchanged, callers must guard it themselves.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Float
{
    let mut ret = value;

    if ret > max {
        ret = max
    }
    if ret < min {
        ret = min
    }

    ret
}

/// Limit the magnitude of a value to `limit`, preserving its sign.
///
/// Returns the limited value and whether the limit was applied. `limit` is expected to be
/// non-negative.
pub fn saturate_abs<T>(value: T, limit: T) -> (T, bool)
where
    T: Float
{
    if value.abs() > limit {
        (limit * value.signum(), true)
    }
    else {
        (value, false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5f64, -0.1, 0.1), 0.1);
        assert_eq!(clamp(-0.5f64, -0.1, 0.1), -0.1);
        assert_eq!(clamp(0.05f64, -0.1, 0.1), 0.05);
        assert!(clamp(f64::NAN, -0.1, 0.1).is_nan());
    }

    #[test]
    fn test_saturate_abs() {
        assert_eq!(saturate_abs(2.0f64, 1.5), (1.5, true));
        assert_eq!(saturate_abs(-2.0f64, 1.5), (-1.5, true));
        assert_eq!(saturate_abs(1.0f64, 1.5), (1.0, false));
        assert_eq!(saturate_abs(-0.3f64, 0.0), (-0.0, true));
    }
}
