// history.rs - Detects when the grid falls into a repeating cycle

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Ring of recent grid fingerprints.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    seen: VecDeque<u64>,
    capacity: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl CycleDetector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            seen: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `true` if `fingerprint` is among the last `capacity` recorded,
    /// i.e. a still life or an oscillator of period up to `capacity` was hit.
    pub fn record(&mut self, fingerprint: u64) -> bool {
        if self.seen.contains(&fingerprint) {
            tracing::debug!(fingerprint, "cycle detected");
            return true;
        }
        if self.seen.len() == self.capacity {
            self.seen.pop_front();
        }
        self.seen.push_back(fingerprint);
        false
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_inside_window_is_a_cycle() {
        let mut history = CycleDetector::new(3);
        assert!(!history.record(1));
        assert!(!history.record(2));
        assert!(history.record(1));
    }

    #[test]
    fn old_entries_fall_out() {
        let mut history = CycleDetector::new(2);
        assert!(!history.record(1));
        assert!(!history.record(2));
        assert!(!history.record(3));
        assert!(!history.record(1));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut history = CycleDetector::default();
        history.record(7);
        history.reset();
        assert!(!history.record(7));
    }
}
