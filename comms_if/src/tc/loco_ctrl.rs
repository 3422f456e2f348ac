//! # Locomotion control commands

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A steering command for the vehicle's locomotion.
///
/// Once produced a command is not modified, a new one is built every cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SteerCmd {
    /// The forward speed of the vehicle in meters/second.
    ///
    /// Positive speeds are "forwards", negative speeds are "backwards"
    pub speed_ms: f64,

    /// The turn rate of the vehicle in radians/second.
    ///
    /// Follows the right hand rule about the vehicle's Z+ (upwards) axis, so that a positive turn
    /// rate will rotate the vehicle to the left, and a negative turn rate will rotate it to the
    /// right.
    pub ang_rate_rads: f64,
}
