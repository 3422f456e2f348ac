//! Rate limiting of repeated log messages
//!
//! A cyclic module which finds itself in the same degraded condition every cycle should not flood
//! the log. [`Throttle`] decides on which cycles a message about a condition should be emitted.

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Cycle counting throttle keyed on the condition being reported.
///
/// The first cycle a condition is reported always passes, after which one cycle in every
/// `period_cycles` passes for as long as the same condition keeps being reported. Reporting a
/// different condition, or calling [`Throttle::clear`], restarts the count.
#[derive(Debug, Clone)]
pub struct Throttle<K> {
    period_cycles: u64,
    current: Option<K>,
    count: u64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<K: PartialEq + Copy> Throttle<K> {
    /// Create a new throttle. A period of zero is treated as one (no throttling).
    pub fn new(period_cycles: u64) -> Self {
        Self {
            period_cycles: period_cycles.max(1),
            current: None,
            count: 0,
        }
    }

    /// Note that `key` occured this cycle, returning true if it should be reported.
    pub fn pass(&mut self, key: K) -> bool {
        if self.current != Some(key) {
            self.current = Some(key);
            self.count = 0;
        }

        let pass = self.count % self.period_cycles == 0;
        self.count = self.count.wrapping_add(1);

        pass
    }

    /// Forget the current condition.
    pub fn clear(&mut self) {
        self.current = None;
        self.count = 0;
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_throttle_period() {
        let mut t = Throttle::new(5);

        let passes: Vec<bool> = (0..11).map(|_| t.pass(1u8)).collect();

        assert_eq!(
            passes,
            vec![true, false, false, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_throttle_key_change() {
        let mut t = Throttle::new(50);

        assert!(t.pass('a'));
        assert!(!t.pass('a'));
        assert!(t.pass('b'));
        assert!(!t.pass('b'));

        t.clear();
        assert!(t.pass('b'));
    }

    #[test]
    fn test_throttle_zero_period() {
        let mut t = Throttle::new(0);
        assert!((0..10).all(|_| t.pass(())));
    }
}
