//! # Communications interface crate.
//!
//! Provides all common communications interfaces for the navigation software.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Commands sent out to the vehicle's locomotion
pub mod tc;

/// Telemetry published for diagnostics and tuning
pub mod tm;

/// Sample definitions for equipment (like the GNSS receiver)
pub mod eqpt;

/// Network module
pub mod net;
