//! # Navigation library.
//!
//! Steers the vehicle toward a single GNSS waypoint. The executable (`nav_exec`) wires these
//! modules into a fixed rate loop, this library allows them to be driven directly from tests.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Command server - publishes the steering command and debug angle
pub mod cmd_server;

/// Data store - everything the main loop carries from one cycle to the next
pub mod data_store;

/// GNSS client - subscribes to the fix, velocity and waypoint streams
pub mod gnss_client;

/// Input latch - holds the most recent sample of each input stream
pub mod input_latch;

/// Executable parameters
pub mod params;

/// Waypoint control module - turns the vehicle toward the target waypoint
pub mod wpt_ctrl;
