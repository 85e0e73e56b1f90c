use counter::EntryCount;
use guard::WriteGuard;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use tracing::trace;

mod counter;
mod guard;

pub(crate) type RandomState = ahash::RandomState;

/// Thread-safe in-memory key-value cache guarded by a single reader-writer lock.
///
/// Any number of readers may hold the lock at once. [`Cache::put`], [`Cache::remove`] and
/// [`Cache::clear`] take it exclusively, so every write is applied atomically with respect to
/// all other operations and a reader never observes a partially written value. The lock is
/// task-fair: a steady stream of readers cannot starve a waiting writer.
///
/// Wrap the cache in a [`std::sync::Arc`] to share it between threads. Both reads and writes only
/// require shared references to the cache.
pub struct Cache<K, V, S = RandomState> {
    entries: RwLock<HashMap<K, V, S>>,
    len: EntryCount,
}

impl<K, V> Cache<K, V, RandomState> {
    /// Creates an empty cache.
    pub fn new() -> Cache<K, V, RandomState> {
        Cache::with_hasher(RandomState::new())
    }

    /// Creates an empty cache with room for at least `capacity` entries.
    ///
    /// The capacity is a sizing hint, not a limit. The cache grows past it as needed.
    pub fn with_capacity(capacity: usize) -> Cache<K, V, RandomState> {
        Cache::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> Cache<K, V, S> {
    /// Creates an empty cache which will use `hash_builder` to hash the keys.
    pub fn with_hasher(hash_builder: S) -> Cache<K, V, S> {
        Cache::from_map(HashMap::with_hasher(hash_builder))
    }

    /// Creates an empty cache with room for at least `capacity` entries, using `hash_builder` to
    /// hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Cache<K, V, S> {
        Cache::from_map(HashMap::with_capacity_and_hasher(capacity, hash_builder))
    }

    fn from_map(entries: HashMap<K, V, S>) -> Cache<K, V, S> {
        let len = EntryCount::default();
        len.publish(entries.len());

        Self {
            entries: RwLock::new(entries),
            len,
        }
    }

    fn write(&self) -> WriteGuard<'_, K, V, S> {
        WriteGuard::new(self.entries.write(), &self.len)
    }

    /// Returns the number of entries in the cache.
    ///
    /// The count is read without taking the lock. While a write is in flight it reports the
    /// count from immediately before or immediately after that write.
    pub fn size(&self) -> usize {
        self.len.get()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut entries = self.write();
        let removed = entries.len();
        entries.clear();

        trace!(removed, "cleared cache");
    }
}

impl<K, V, S> Cache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair, overwriting the value if the key is already present.
    ///
    /// Once this returns, every subsequent [`Cache::get`] for `key`, on any thread, observes this
    /// value or one written later.
    pub fn put(&self, key: K, value: V) {
        let previous = {
            let mut entries = self.write();
            let previous = entries.insert(key, value);

            trace!(len = entries.len(), replaced = previous.is_some(), "put entry");
            previous
        };

        // the displaced value is dropped after the write lock is released
        drop(previous);
    }

    /// Returns a clone of the value corresponding to the key.
    ///
    /// Consider wrapping your values in [`std::sync::Arc`] if cloning is too expensive for your
    /// use-case, or use [`Cache::get_with`] to borrow the value instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.entries.read().get(key).cloned()
    }

    /// Calls `f` with a reference to the value corresponding to the key and returns its result.
    ///
    /// The read lock is held while `f` runs, so `f` must not call back into this cache at all.
    /// Besides writes, a nested read can deadlock too: the lock is task-fair, so once a writer
    /// is queued the inner read waits behind it while the writer waits for `f` to return.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.entries.read().get(key).map(f)
    }

    /// Returns `true` if the cache holds a value for the key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.read().contains_key(key)
    }

    /// Removes the entry for the key. Does nothing if the key is absent.
    pub fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let removed = {
            let mut entries = self.write();
            let removed = entries.remove(key);

            trace!(len = entries.len(), found = removed.is_some(), "removed entry");
            removed
        };

        drop(removed);
    }
}

impl<K, V, S> Default for Cache<K, V, S>
where
    S: Default,
{
    fn default() -> Cache<K, V, S> {
        Cache::with_hasher(S::default())
    }
}

impl<K, V, S> fmt::Debug for Cache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.size())
            .finish_non_exhaustive()
    }
}

impl<K, V, S> FromIterator<(K, V)> for Cache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Cache<K, V, S> {
        Cache::from_map(iter.into_iter().collect())
    }
}

/// Inserts all pairs under a single acquisition of the write lock.
impl<K, V, S> Extend<(K, V)> for &Cache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        // drain the iterator first, it may read from this cache
        let pairs: Vec<(K, V)> = iter.into_iter().collect();

        let mut entries = self.write();
        entries.extend(pairs);

        trace!(len = entries.len(), "extended cache");
    }
}
