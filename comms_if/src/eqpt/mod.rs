//! # Equipment Interface
//!
//! This module defines the interface structures which are received from equipment publishers.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod gnss;
