//! Waypoint control module
//!
//! Steers the vehicle toward a target waypoint using a PI controller on the angle between the
//! vehicle's course (direction of travel over the ground) and the bearing to the target. The
//! forward speed is fixed, only the angular rate is controlled.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod calc;
mod params;
mod state;
mod vel_source;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;
pub use vel_source::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur while initialising WptCtrl.
///
/// Cyclic processing never fails, a cycle in which no command can be computed is reported
/// through [`NavGate`] instead.
#[derive(Debug, thiserror::Error)]
pub enum WptCtrlError {
    #[error("Could not load the parameters: {0}")]
    ParamLoadError(util::params::LoadError),

    #[error("Invalid parameter {0}: {1}")]
    InvalidParam(&'static str, String),

    #[error("The cycle period must be positive and finite")]
    InvalidCyclePeriod,

    #[error("Could not create the archive: {0}")]
    ArchiveError(util::archive::ArchiveError),
}
