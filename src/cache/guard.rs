use crate::cache::counter::EntryCount;
use parking_lot::RwLockWriteGuard;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

/// Exclusive access to the entries. Publishes the entry count when dropped, before the write
/// lock is released.
///
/// The count is published on unwind as well, so a panicking `Hash` or `Eq` impl in the middle of
/// a mutation cannot leave [`EntryCount`] out of step with the map.
pub(crate) struct WriteGuard<'a, K, V, S> {
    entries: RwLockWriteGuard<'a, HashMap<K, V, S>>,
    len: &'a EntryCount,
}

impl<'a, K, V, S> WriteGuard<'a, K, V, S> {
    pub(crate) fn new(
        entries: RwLockWriteGuard<'a, HashMap<K, V, S>>,
        len: &'a EntryCount,
    ) -> Self {
        Self { entries, len }
    }
}

impl<K, V, S> Deref for WriteGuard<'_, K, V, S> {
    type Target = HashMap<K, V, S>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<K, V, S> DerefMut for WriteGuard<'_, K, V, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl<K, V, S> Drop for WriteGuard<'_, K, V, S> {
    fn drop(&mut self) {
        // runs before the fields drop, so the lock is still held here
        self.len.publish(self.entries.len());
    }
}
