//! # Telemetry module
//!
//! Diagnostic quantities published alongside the steering command.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The raw heading error computed in a navigating cycle, before the integral term and the
/// saturation are applied. Used for tuning the controller gains.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugAngle {
    /// Signed angle from the course to the bearing.
    ///
    /// Units: radians
    pub angle_rad: f64,
}
