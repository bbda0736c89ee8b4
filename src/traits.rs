//! # Cache Trait
//!
//! Defines the seam between the cache structures and the memoized
//! computations that consume them: a key-value store with read-through
//! lookup and insert-or-overwrite semantics.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌───────────────────────────────────┐
//!                    │           KvCache<K, V>           │
//!                    │                                   │
//!                    │  get(&mut, &K) → Option<V>        │
//!                    │  insert(&mut, K, V) → Option<V>   │
//!                    │  len(&) → usize                   │
//!                    │  is_empty(&) → bool               │
//!                    └────────────────┬──────────────────┘
//!                                     │
//!            ┌────────────────────────┼────────────────────────┐
//!            ▼                        ▼                        ▼
//!   IntervalLruCache            SplayCache                TableMemo
//!   (Span → i64,                (u64 → u64,               (u64 → u64,
//!    bounded, recency)           unbounded, splaying)      unbounded, flat)
//! ```
//!
//! ## Design Notes
//!
//! `get` takes `&mut self` and returns the value by copy: both caches
//! restructure themselves on lookup (recency move, splay), and all stored
//! values in this crate are `Copy` scalars. Memoizers such as
//! [`memo::recursive::fibonacci`](crate::memo::recursive::fibonacci) are
//! generic over this trait, so the same recursion can run against any
//! implementation.

/// Key-value cache operations shared by every memoization store in this crate.
///
/// # Example
///
/// ```
/// use memokit::cache::splay::SplayCache;
/// use memokit::traits::KvCache;
///
/// fn warm<C: KvCache<u64, u64>>(cache: &mut C, pairs: &[(u64, u64)]) {
///     for &(key, value) in pairs {
///         cache.insert(key, value);
///     }
/// }
///
/// let mut cache = SplayCache::new();
/// warm(&mut cache, &[(1, 10), (2, 20)]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait KvCache<K, V> {
    /// Looks up `key`, returning its value if present.
    ///
    /// Implementations may restructure themselves on every lookup (move the
    /// entry to the most-recently-used position, splay the node to the
    /// root). A miss is a defined result, not an error.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Inserts or overwrites `key`, returning the previous value if the key
    /// existed.
    ///
    /// Bounded implementations may evict another entry to make room;
    /// inserting an existing key never creates a duplicate.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the number of entries currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
