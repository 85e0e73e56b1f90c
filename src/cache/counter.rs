use std::sync::atomic::{AtomicUsize, Ordering};

/// Entry count of the map, readable without taking the lock.
///
/// Only the holder of the write lock publishes, so the values observed by readers are exactly
/// the lengths the map had between consecutive writes.
#[derive(Debug, Default)]
pub(crate) struct EntryCount {
    len: AtomicUsize,
}

impl EntryCount {
    pub(crate) fn get(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Must be called while holding the write lock, after the mutation is applied.
    pub(crate) fn publish(&self, len: usize) {
        self.len.store(len, Ordering::Release);
    }
}
