//! Parameters structure for WptCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::{VelSourceKind, WptCtrlError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Waypoint control.
///
/// Any field missing from the parameter file takes its default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {

    // ---- COMMAND ----

    /// Forward speed demanded while navigating.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// If true the angular rate demand is negated, for vehicles whose steering is mounted the
    /// other way round.
    pub reverse: bool,

    // ---- GAINS ----

    /// Proportional gain on the heading error.
    ///
    /// Units: 1/seconds
    pub k_p: f64,

    /// Integral gain on the heading error.
    ///
    /// Units: 1/seconds
    pub k_i: f64,

    /// Value of the integral term at startup, clamped into the integral limit.
    ///
    /// Units: radians/second
    pub initial_integral_rad: f64,

    /// Magnitude bound of the integral term.
    ///
    /// Units: radians/second
    pub integral_limit_rad: f64,

    /// Gain applied to the distance to the target when computing the angular rate limit, which
    /// is `(dist_deg * dist_gain)^2`.
    ///
    /// Units: 1/degrees
    pub dist_gain: f64,

    // ---- THRESHOLDS ----

    /// Minimum number of satellites in the velocity solution. Velocity sources without a
    /// satellite count are never rejected.
    pub min_num_sats: u8,

    /// Course speed above which the course direction is trusted for the proportional term.
    ///
    /// Units: course units (millimeters/second)
    pub valid_speed_threshold: f64,

    /// Course speed above which the integral term accumulates.
    ///
    /// Units: course units (millimeters/second)
    pub moving_speed_threshold: f64,

    // ---- VELOCITY SOURCE ----

    /// Shape of the samples on the velocity stream.
    pub vel_source: VelSourceKind,

    /// Scale applied to velocity samples to bring them into course units. If not set the
    /// default for `vel_source` is used.
    pub vel_scale: Option<f64>,

    // ---- REPORTING ----

    /// Number of cycles between repeated warnings about the same gate condition.
    pub warn_period_cycles: u64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            speed_ms: 1.5,
            reverse: false,
            k_p: 0.5,
            k_i: 0.0,
            initial_integral_rad: 0.0,
            integral_limit_rad: 0.1,
            dist_gain: 4503.0,
            min_num_sats: 2,
            valid_speed_threshold: 500.0,
            moving_speed_threshold: 600.0,
            vel_source: VelSourceKind::VelNed,
            vel_scale: None,
            warn_period_cycles: 100,
        }
    }
}

impl Params {
    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<(), WptCtrlError> {
        check_finite("speed_ms", self.speed_ms)?;
        check_finite("k_p", self.k_p)?;
        check_finite("k_i", self.k_i)?;
        check_finite("initial_integral_rad", self.initial_integral_rad)?;
        check_non_negative("integral_limit_rad", self.integral_limit_rad)?;
        check_non_negative("dist_gain", self.dist_gain)?;
        check_finite("valid_speed_threshold", self.valid_speed_threshold)?;
        check_finite("moving_speed_threshold", self.moving_speed_threshold)?;

        if let Some(s) = self.vel_scale {
            check_finite("vel_scale", s)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

fn check_finite(name: &'static str, value: f64) -> Result<(), WptCtrlError> {
    if value.is_finite() {
        Ok(())
    }
    else {
        Err(WptCtrlError::InvalidParam(name, format!("{} is not finite", value)))
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), WptCtrlError> {
    check_finite(name, value)?;

    if value >= 0.0 {
        Ok(())
    }
    else {
        Err(WptCtrlError::InvalidParam(name, format!("{} is negative", value)))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let params: Params = util::params::parse("k_i = 0.05\nreverse = true\n").unwrap();

        assert_eq!(params.k_i, 0.05);
        assert!(params.reverse);
        assert_eq!(params.k_p, 0.5);
        assert_eq!(params.speed_ms, 1.5);
        assert_eq!(params.dist_gain, 4503.0);
        assert_eq!(params.integral_limit_rad, 0.1);
        assert_eq!(params.min_num_sats, 2);
        assert_eq!(params.vel_source, VelSourceKind::VelNed);
        assert_eq!(params.vel_scale, None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_vel_source_from_toml() {
        let params: Params =
            util::params::parse("vel_source = \"Vector\"\nvel_scale = 100.0\n").unwrap();

        assert_eq!(params.vel_source, VelSourceKind::Vector);
        assert_eq!(params.vel_scale, Some(100.0));
    }

    #[test]
    fn test_validate() {
        let mut params = Params::default();
        params.dist_gain = -1.0;
        assert!(matches!(
            params.validate(),
            Err(WptCtrlError::InvalidParam("dist_gain", _))
        ));

        let mut params = Params::default();
        params.k_p = f64::NAN;
        assert!(matches!(
            params.validate(),
            Err(WptCtrlError::InvalidParam("k_p", _))
        ));
    }
}
