use std::collections::BTreeMap;

use crate::config::RetryScope;
use crate::state::Position;

/// Failure bookkeeping for the eager loop.
#[derive(Clone, Debug)]
pub(crate) struct RetryTracker {
    scope: RetryScope,
    threshold: u32,
    shared: u32,
    per_position: BTreeMap<Position, u32>,
}

impl RetryTracker {
    pub(crate) fn new(scope: RetryScope, threshold: u32) -> Self {
        Self {
            scope,
            threshold,
            shared: 0,
            per_position: BTreeMap::new(),
        }
    }

    /// Records a failed match at `position`.
    ///
    /// Returns `true` when the position should be retired; its counter is
    /// cleared in that case.
    pub(crate) fn record_failure(&mut self, position: Position) -> bool {
        let count = match self.scope {
            RetryScope::Global => &mut self.shared,
            RetryScope::PerPosition => self.per_position.entry(position).or_insert(0),
        };
        *count += 1;
        if *count < self.threshold {
            return false;
        }

        match self.scope {
            RetryScope::Global => self.shared = 0,
            RetryScope::PerPosition => {
                self.per_position.remove(&position);
            }
        }
        true
    }

    pub(crate) fn record_success(&mut self, position: Position) {
        match self.scope {
            RetryScope::Global => self.shared = 0,
            RetryScope::PerPosition => {
                self.per_position.remove(&position);
            }
        }
    }

    pub(crate) fn failures(&self, position: Position) -> u32 {
        match self.scope {
            RetryScope::Global => self.shared,
            RetryScope::PerPosition => self.per_position.get(&position).copied().unwrap_or(0),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.shared = 0;
        self.per_position.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retires_on_the_threshold_failure() {
        let mut tracker = RetryTracker::new(RetryScope::PerPosition, 3);
        let spot = Position::new(0, 1);

        assert!(!tracker.record_failure(spot));
        assert!(!tracker.record_failure(spot));
        assert!(tracker.record_failure(spot));
        assert_eq!(tracker.failures(spot), 0);
    }

    #[test]
    fn per_position_counts_are_independent() {
        let mut tracker = RetryTracker::new(RetryScope::PerPosition, 2);
        let a = Position::new(0, 1);
        let b = Position::new(2, 0);

        assert!(!tracker.record_failure(a));
        tracker.record_success(b);
        assert!(!tracker.record_failure(b));
        assert!(tracker.record_failure(a));
    }

    #[test]
    fn global_counter_resets_on_any_success() {
        let mut tracker = RetryTracker::new(RetryScope::Global, 2);
        let a = Position::new(0, 1);
        let b = Position::new(2, 0);

        assert!(!tracker.record_failure(a));
        tracker.record_success(b);
        assert!(!tracker.record_failure(a));
        // Shared count now belongs to whichever position fails next.
        assert!(tracker.record_failure(b));
    }
}
