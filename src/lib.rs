//! A minimal thread-safe in-memory key-value cache.
//!
//! The cache is a single hash map behind a reader-writer lock. Readers run concurrently; writers
//! take the lock exclusively, so every operation is linearizable and a reader never observes a
//! value torn between two writes.
//!
//! # Features
//!
//! - Thread-safe by default - no need for explicit synchronization
//! - Concurrent reads, serialized writes
//! - Writer-starvation-free locking via [`parking_lot`]
//! - Entry count readable without taking the lock
//! - No unsafe code
//!
//! There is no eviction, expiration or capacity bound. Entries live until they are removed or the
//! cache is cleared or dropped.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use rw_cache::Cache;
//!
//! let cache = Cache::new();
//!
//! cache.put(1, "A");
//! cache.put(2, "B");
//!
//! assert_eq!(cache.get(&1), Some("A"));
//! assert_eq!(cache.get(&2), Some("B"));
//! assert_eq!(cache.get(&3), None);
//!
//! cache.clear();
//! assert_eq!(cache.get(&1), None);
//! ```
//!
//! Removing entries and reading the size:
//!
//! ```rust
//! use rw_cache::Cache;
//!
//! let cache = Cache::new();
//! cache.put("key1", "value1");
//! cache.put("key2", "value2");
//! assert_eq!(cache.size(), 2);
//!
//! cache.remove("key1");
//! cache.remove("missing");
//! assert_eq!(cache.size(), 1);
//! ```
//!
//! Thread-safe usage across multiple threads:
//!
//! ```rust
//! use rw_cache::Cache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(Cache::new());
//! cache.put("key1", "value1");
//!
//! // Spawn a thread that inserts a value
//! let cache_in_arc = Arc::clone(&cache);
//! let handle = thread::spawn(move || {
//!     cache_in_arc.put("key2", "value2");
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(cache.get("key1"), Some("value1"));
//! assert_eq!(cache.get("key2"), Some("value2"));
//! ```

#![forbid(unsafe_code)]
pub mod cache;

pub use cache::Cache;
