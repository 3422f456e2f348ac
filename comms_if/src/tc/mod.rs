//! # Telecommand module
//!
//! Commands the navigation software sends out to the vehicle.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod loco_ctrl;
