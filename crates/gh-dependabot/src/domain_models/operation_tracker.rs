//! In-flight operation bookkeeping
//!
//! The event loop marks operations as started; background tasks finish them
//! by way of completion actions. Every read-modify-write happens under one
//! lock so concurrent finishes never lose an update.

use super::OperationKey;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Counts running operations per review unit
///
/// A key is present iff at least one operation for it is running.
#[derive(Debug, Default)]
pub struct OperationTracker {
    operations: Mutex<HashMap<OperationKey, usize>>,
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<OperationKey, usize>> {
        self.operations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a started operation, returning the new count for `key`
    pub fn mark_in_progress(&self, key: &OperationKey) -> usize {
        let mut operations = self.lock();
        let count = operations.entry(key.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Record a finished operation, returning the remaining count for `key`
    ///
    /// Unknown keys are ignored.
    pub fn mark_done(&self, key: &OperationKey) -> usize {
        let mut operations = self.lock();
        let Some(count) = operations.get_mut(key) else {
            log::debug!("mark_done for {} without running operation", key);
            return 0;
        };
        *count -= 1;
        let remaining = *count;
        if remaining == 0 {
            operations.remove(key);
        }
        remaining
    }

    pub fn has_work_in_progress(&self) -> bool {
        !self.lock().is_empty()
    }

    pub fn is_in_progress(&self, key: &OperationKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Number of running operations for `key`
    pub fn count(&self, key: &OperationKey) -> usize {
        self.lock().get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn key(number: u64) -> OperationKey {
        OperationKey::new("org/app", number)
    }

    #[test]
    fn test_counts_per_key() {
        let tracker = OperationTracker::new();
        assert!(!tracker.has_work_in_progress());

        assert_eq!(tracker.mark_in_progress(&key(1)), 1);
        assert_eq!(tracker.mark_in_progress(&key(1)), 2);
        assert_eq!(tracker.mark_in_progress(&key(2)), 1);
        assert!(tracker.has_work_in_progress());
        assert!(tracker.is_in_progress(&key(2)));

        assert_eq!(tracker.mark_done(&key(1)), 1);
        assert_eq!(tracker.mark_done(&key(2)), 0);
        assert_eq!(tracker.count(&key(2)), 0);
        assert!(!tracker.is_in_progress(&key(2)));
        assert!(tracker.has_work_in_progress());

        assert_eq!(tracker.mark_done(&key(1)), 0);
        assert!(!tracker.has_work_in_progress());
    }

    #[test]
    fn test_mark_done_on_unknown_key_is_noop() {
        let tracker = OperationTracker::new();
        assert_eq!(tracker.mark_done(&key(1)), 0);
        assert!(!tracker.has_work_in_progress());
    }

    #[test]
    fn test_double_mark_done_does_not_go_negative() {
        let tracker = OperationTracker::new();
        tracker.mark_in_progress(&key(1));
        tracker.mark_done(&key(1));
        tracker.mark_done(&key(1));
        assert_eq!(tracker.count(&key(1)), 0);
        assert_eq!(tracker.mark_in_progress(&key(1)), 1);
    }

    #[test]
    fn test_concurrent_start_and_finish_leave_no_entry() {
        const N: usize = 64;
        let tracker = Arc::new(OperationTracker::new());

        let starts: Vec<_> = (0..N)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    tracker.mark_in_progress(&key(7));
                })
            })
            .collect();
        for handle in starts {
            handle.join().unwrap();
        }
        assert_eq!(tracker.count(&key(7)), N);

        let finishes: Vec<_> = (0..N)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    tracker.mark_done(&key(7));
                })
            })
            .collect();
        for handle in finishes {
            handle.join().unwrap();
        }

        assert_eq!(tracker.count(&key(7)), 0);
        assert!(!tracker.has_work_in_progress());
    }
}
