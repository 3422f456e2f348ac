//! Geometry used by waypoint control
//!
//! All vectors are 2D with `x` pointing north and `y` pointing east.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

use comms_if::eqpt::gnss::GeoPosition;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Direction and distance from the current position to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    /// Unit vector toward the target, `None` if the target is at the current position or the
    /// distance could not be computed.
    pub dir: Option<Vector2<f64>>,

    /// Distance to the target, with the longitude difference scaled by the cosine of the
    /// target's latitude.
    ///
    /// Units: degrees
    pub dist_deg: f64,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the bearing from `fix` to `target`.
///
/// Uses an equirectangular approximation, which is accurate for the short distances between
/// waypoints.
pub fn bearing(fix: &GeoPosition, target: &GeoPosition) -> Bearing {
    let d_lat = target.latitude_deg - fix.latitude_deg;
    let d_lon = target.latitude_deg.to_radians().cos()
        * (target.longitude_deg - fix.longitude_deg);

    let (dir, dist_deg) = unit(Vector2::new(d_lat, d_lon));

    Bearing { dir, dist_deg }
}

/// Split a vector into its direction and magnitude.
///
/// The direction is `None` when the magnitude is zero or not finite.
pub fn unit(v: Vector2<f64>) -> (Option<Vector2<f64>>, f64) {
    let norm = v.norm();

    if norm.is_finite() && norm > 0.0 {
        (Some(v / norm), norm)
    }
    else {
        (None, norm)
    }
}

/// Signed angle from `course` to `bearing`.
///
/// Negative when the bearing is clockwise (to the right) of the course, so that the angle has
/// the same sign as the turn rate needed to correct it.
pub fn signed_angle(course: &Vector2<f64>, bearing: &Vector2<f64>) -> f64 {
    -course.perp(bearing).atan2(course.dot(bearing))
}

/// Heading error for the cycle, `None` if either direction is unknown or the angle is NaN.
pub fn heading_error(
    course: Option<Vector2<f64>>,
    bearing: Option<Vector2<f64>>
) -> Option<f64> {
    let angle = signed_angle(&course?, &bearing?);

    match angle.is_nan() {
        true => None,
        false => Some(angle)
    }
}

/// Angular rate limit for the given distance to the target.
///
/// An unknown (non-finite) distance allows no turning at all.
pub fn rate_limit(dist_deg: f64, dist_gain: f64) -> f64 {
    let limit = (dist_deg * dist_gain).powi(2);

    match limit.is_finite() {
        true => limit,
        false => 0.0
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn north() -> Vector2<f64> {
        Vector2::new(1.0, 0.0)
    }

    fn east() -> Vector2<f64> {
        Vector2::new(0.0, 1.0)
    }

    #[test]
    fn test_signed_angle() {
        // Bearing to the right of the course is a negative angle
        assert_relative_eq!(signed_angle(&north(), &east()), -FRAC_PI_2);
        assert_relative_eq!(signed_angle(&east(), &north()), FRAC_PI_2);

        assert_relative_eq!(signed_angle(&north(), &north()), 0.0);
        assert_relative_eq!(signed_angle(&north(), &(-north())).abs(), PI);

        let ne = Vector2::new(1.0, 1.0).normalize();
        assert_relative_eq!(signed_angle(&north(), &ne), -FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing() {
        let b = bearing(&GeoPosition::new(0.0, 0.0), &GeoPosition::new(0.0, 0.001));

        assert_relative_eq!(b.dist_deg, 0.001, epsilon = 1e-12);
        let dir = b.dir.unwrap();
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(dir.y, 1.0, epsilon = 1e-12);

        // Longitude is compressed away from the equator
        let b = bearing(&GeoPosition::new(60.0, 0.0), &GeoPosition::new(60.0, 0.002));
        assert_relative_eq!(b.dist_deg, 0.001, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_bearing() {
        let here = GeoPosition::new(51.0, -1.0);

        let b = bearing(&here, &here);
        assert_eq!(b.dir, None);
        assert_eq!(b.dist_deg, 0.0);

        let b = bearing(&here, &GeoPosition::new(f64::NAN, -1.0));
        assert_eq!(b.dir, None);
    }

    #[test]
    fn test_heading_error_degenerate() {
        assert_eq!(heading_error(None, Some(east())), None);
        assert_eq!(heading_error(Some(north()), None), None);
        assert_eq!(
            heading_error(Some(Vector2::new(f64::NAN, 0.0)), Some(east())),
            None
        );
        assert_relative_eq!(heading_error(Some(north()), Some(east())).unwrap(), -FRAC_PI_2);
    }

    #[test]
    fn test_rate_limit() {
        assert_relative_eq!(rate_limit(0.001, 4503.0), 4.503 * 4.503, epsilon = 1e-9);
        assert_eq!(rate_limit(0.0, 4503.0), 0.0);
        assert_eq!(rate_limit(f64::NAN, 4503.0), 0.0);
        assert_eq!(rate_limit(f64::INFINITY, 4503.0), 0.0);
    }
}
