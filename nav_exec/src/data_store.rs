//! # Data Store

use crate::wpt_ctrl;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u64,

    // WptCtrl
    pub wpt_ctrl: wpt_ctrl::WptCtrl,
    pub wpt_ctrl_input: wpt_ctrl::InputData,
    pub wpt_ctrl_output: wpt_ctrl::OutputData,
    pub wpt_ctrl_status_rpt: wpt_ctrl::StatusReport,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle.
    pub fn cycle_start(&mut self) {
        self.wpt_ctrl_input = wpt_ctrl::InputData::default();
        self.wpt_ctrl_output = wpt_ctrl::OutputData::default();
        self.wpt_ctrl_status_rpt = wpt_ctrl::StatusReport::default();
    }

    /// Perform actions required at the end of a cycle.
    pub fn cycle_end(&mut self) {
        self.num_cycles += 1;
    }
}
