//! # Network parameters
//!
//! Endpoints of every stream the navigation software takes part in. Loaded from `net.toml`.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Network endpoints.
///
/// The position fix and velocity endpoints depend on the receiver driver in use so they have no
/// default, see [`NetParams::gps_fix_endpoint`] and [`NetParams::gps_vel_ned_endpoint`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetParams {
    /// Endpoint of the position fix publisher
    #[serde(default)]
    pub gps_fix_endpoint: Option<String>,

    /// Endpoint of the velocity publisher
    #[serde(default)]
    pub gps_vel_ned_endpoint: Option<String>,

    /// Endpoint of the waypoint publisher
    #[serde(default = "default_waypoint_endpoint")]
    pub waypoint_endpoint: String,

    /// Endpoint the steering command is published on
    #[serde(default = "default_cmd_endpoint")]
    pub cmd_endpoint: String,

    /// Endpoint the debug angle is published on
    #[serde(default = "default_debug_angle_endpoint")]
    pub debug_angle_endpoint: String,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum NetParamsError {
    #[error("Parameter '{0}' is not defined")]
    ConfigurationMissing(&'static str),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl NetParams {
    /// Get the position fix endpoint, which must have been configured.
    pub fn gps_fix_endpoint(&self) -> Result<&str, NetParamsError> {
        self.gps_fix_endpoint
            .as_deref()
            .ok_or(NetParamsError::ConfigurationMissing("gps_fix_endpoint"))
    }

    /// Get the velocity endpoint, which must have been configured.
    pub fn gps_vel_ned_endpoint(&self) -> Result<&str, NetParamsError> {
        self.gps_vel_ned_endpoint
            .as_deref()
            .ok_or(NetParamsError::ConfigurationMissing("gps_vel_ned_endpoint"))
    }

    /// Check that all required endpoints are present.
    pub fn validate(&self) -> Result<(), NetParamsError> {
        self.gps_fix_endpoint()?;
        self.gps_vel_ned_endpoint()?;
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn default_waypoint_endpoint() -> String {
    "tcp://localhost:5030".into()
}

fn default_cmd_endpoint() -> String {
    "tcp://*:5040".into()
}

fn default_debug_angle_endpoint() -> String {
    "tcp://*:5041".into()
}
