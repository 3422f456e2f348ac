//! # Input latch
//!
//! Samples arrive on background threads at whatever rate their publishers choose, the control
//! loop only ever wants the newest one. A [`Latch`] holds a single value which is overwritten as a
//! whole, readers take a copy. There is no queue, samples which are overwritten before the loop
//! reads them are lost.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::sync::{Arc, Mutex, MutexGuard};

use comms_if::eqpt::gnss::{GeoPosition, VelSample};

use crate::wpt_ctrl;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Handle to a single latched value.
///
/// Cloning the handle shares the underlying cell, so one clone can be moved into a receiving
/// thread while the other stays with the control loop.
#[derive(Debug)]
pub struct Latch<T> {
    cell: Arc<Mutex<Option<T>>>,
}

/// The latches for every input of waypoint control.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    /// Latest position fix
    pub fix: Latch<GeoPosition>,

    /// Latest velocity sample
    pub vel: Latch<VelSample>,

    /// Latest target waypoint
    pub target: Latch<GeoPosition>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<T: Copy> Latch<T> {
    /// Create an empty latch.
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the latched value.
    pub fn set(&self, value: T) {
        *self.lock() = Some(value);
    }

    /// Get a copy of the latched value, or `None` if nothing has been latched yet.
    pub fn get(&self) -> Option<T> {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<Option<T>> {
        // The cell only ever holds a complete value, so a panic in another holder cannot have
        // left it half written.
        self.cell.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Clone for Latch<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: Copy> Default for Latch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    /// Read every latch once, producing the input for this cycle.
    pub fn snapshot(&self) -> wpt_ctrl::InputData {
        wpt_ctrl::InputData {
            fix: self.fix.get(),
            vel: self.vel.get(),
            target: self.target.get(),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use std::thread;

    #[test]
    fn test_latest_value_wins() {
        let latch = Latch::new();
        assert_eq!(latch.get(), None);

        latch.set(1u32);
        latch.set(2);
        latch.set(3);
        assert_eq!(latch.get(), Some(3));

        // Reading doesn't consume
        assert_eq!(latch.get(), Some(3));
    }

    #[test]
    fn test_clone_shares_cell() {
        let latch = InputLatch::default();
        let writer = latch.clone();

        writer.target.set(GeoPosition::new(10.0, 20.0));

        let input = latch.snapshot();
        assert_eq!(input.target, Some(GeoPosition::new(10.0, 20.0)));
        assert!(input.fix.is_none());
        assert!(input.vel.is_none());
    }

    #[test]
    fn test_no_torn_reads() {
        let latch: Latch<GeoPosition> = Latch::new();
        let writer = latch.clone();

        let jh = thread::spawn(move || {
            for i in 0..10_000 {
                let v = i as f64;
                writer.set(GeoPosition::new(v, -v));
            }
        });

        for _ in 0..10_000 {
            if let Some(p) = latch.get() {
                assert_eq!(p.latitude_deg, -p.longitude_deg);
                assert!(p.fix_valid);
            }
        }

        jh.join().unwrap();
        assert_eq!(latch.get(), Some(GeoPosition::new(9999.0, -9999.0)));
    }
}
