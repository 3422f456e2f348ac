//! # GNSS Equipment Communications Module
//!
//! Samples published by the GNSS receiver (and by whatever selects the navigation target). Each
//! sample is a small `Copy` value so that it can be latched and read as a whole.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A position solution from the receiver.
///
/// The same type is used for the navigation target (the waypoint), in which case `fix_valid` is
/// not inspected.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude of the position.
    ///
    /// Units: degrees
    pub latitude_deg: f64,

    /// Longitude of the position.
    ///
    /// Units: degrees
    pub longitude_deg: f64,

    /// True if the receiver has a position solution. When false the latitude and longitude are
    /// meaningless.
    pub fix_valid: bool,
}

/// Velocity in the North-East-Down frame as reported by a receiver which integrates its velocity
/// solution with a quality indicator.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelNed {
    /// Velocity north.
    ///
    /// Units: millimeters/second
    pub n_mms: i32,

    /// Velocity east.
    ///
    /// Units: millimeters/second
    pub e_mms: i32,

    /// Velocity down.
    ///
    /// Units: millimeters/second
    pub d_mms: i32,

    /// Number of satellites used in the velocity solution
    pub n_sats: u8,
}

/// A bare North-East-Down velocity vector with no quality information.
///
/// Units are those of the publisher (usually meters/second), consumers must scale it themselves.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelVector {
    /// North component
    pub x: f64,

    /// East component
    pub y: f64,

    /// Down component
    pub z: f64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A sample published on the velocity stream, which can come in either shape depending on the
/// receiver driver in use.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum VelSample {
    VelNed(VelNed),
    Vector(VelVector),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl GeoPosition {
    /// Create a new valid position
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            fix_valid: true,
        }
    }

    /// Create a position marked as having no fix.
    pub fn no_fix() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            fix_valid: false,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
