//! # Navigation Executable Parameters
//!
//! This module provide parameters for the navigation executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavExecParams {

    /// Target period of one cycle of the main loop.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// If false the steering command is computed and archived but never published. The debug
    /// angle is always published.
    pub publish_cmd: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for NavExecParams {
    fn default() -> Self {
        Self {
            cycle_period_s: 0.1,
            publish_cmd: true,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: NavExecParams = util::params::parse("").unwrap();
        assert_eq!(params.cycle_period_s, 0.1);
        assert!(params.publish_cmd);

        let params: NavExecParams = util::params::parse("publish_cmd = false").unwrap();
        assert!(!params.publish_cmd);
    }
}
