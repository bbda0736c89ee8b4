//! Interval-keyed LRU cache with positional invalidation.
//!
//! Caches an integer aggregate per inclusive span `[left, right]` under a
//! fixed capacity. Recency is tracked in an intrusive list; a write to the
//! underlying sequence invalidates exactly the spans that cover the written
//! position, so cached results for disjoint spans survive localized updates.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                       IntervalLruCache                        │
//!   │                                                               │
//!   │   index: FxHashMap<Span, SlotId>                              │
//!   │   ┌──────────┬─────────┐                                      │
//!   │   │  (0, 2)  │  id_0   │──┐                                   │
//!   │   │  (1, 3)  │  id_1   │──┼─┐                                 │
//!   │   │  (4, 6)  │  id_2   │──┼─┼─┐                               │
//!   │   └──────────┴─────────┘  │ │ │                               │
//!   │                           ▼ ▼ ▼                               │
//!   │   order: IntrusiveList<Entry { span, value }>                 │
//!   │   head ─► [id_2] ◄──► [id_0] ◄──► [id_1] ◄── tail             │
//!   │           (MRU)                   (LRU)                       │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Behavior
//! - `get`: hit moves the entry to MRU and returns the value; miss has no
//!   side effect.
//! - `put`: insert or overwrite at MRU; when the insert pushes the count
//!   above capacity, exactly one entry — the LRU — is evicted afterwards.
//!   The count may transiently reach `capacity + 1` inside the call; only
//!   the post-call state is bounded.
//! - `invalidate_covering(p)`: removes every entry with `left ≤ p ≤ right`;
//!   the relative recency of surviving entries is untouched.
//!
//! ## Performance
//! - `get` / `put`: O(1) average
//! - `invalidate_covering`: O(len) scan, bounded by capacity
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::IntervalLruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::IntervalLruMetricsSnapshot;
use crate::traits::KvCache;

/// Capacity used by [`IntervalLruCache::default`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Inclusive index span `[left, right]` with `left <= right`.
///
/// Used as the cache key for range aggregates. Construction with
/// `left > right` is a caller precondition violation; it is debug-asserted,
/// not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub left: u32,
    pub right: u32,
}

impl Span {
    /// Creates a span over `[left, right]` inclusive.
    #[inline]
    pub fn new(left: u32, right: u32) -> Self {
        debug_assert!(left <= right, "span endpoints out of order: ({left}, {right})");
        Self { left, right }
    }

    /// Returns `true` if `position` falls inside the span, endpoints included.
    #[inline]
    pub fn covers(self, position: u32) -> bool {
        self.left <= position && position <= self.right
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// What the recency list actually stores per cached span.
#[derive(Debug)]
struct Entry {
    span: Span,
    value: i64,
}

/// Bounded recency cache of span → aggregate, with positional invalidation.
///
/// # Example
///
/// ```
/// use memokit::cache::interval_lru::{IntervalLruCache, Span};
///
/// let mut cache = IntervalLruCache::with_capacity(2).unwrap();
/// cache.put(Span::new(0, 2), 5);
/// cache.put(Span::new(1, 3), 9);
///
/// assert_eq!(cache.get(Span::new(0, 2)), Some(5)); // now MRU
/// cache.put(Span::new(4, 6), 1);                   // evicts (1, 3)
///
/// assert_eq!(cache.get(Span::new(1, 3)), None);
/// assert_eq!(cache.get(Span::new(0, 2)), Some(5));
/// ```
pub struct IntervalLruCache {
    index: FxHashMap<Span, SlotId>,
    // front = MRU, back = LRU
    order: IntrusiveList<Entry>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: IntervalLruMetrics,
}

impl IntervalLruCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero: a zero-capacity cache
    /// would turn every `put` into an immediate self-eviction, which is
    /// never what a caller configuring a cache wants silently.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("interval cache capacity must be > 0"));
        }
        Ok(Self::new_unchecked(capacity))
    }

    fn new_unchecked(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: IntervalLruMetrics::default(),
        }
    }

    /// Looks up `span`, marking it most recently used on a hit.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    pub fn get(&mut self, span: Span) -> Option<i64> {
        let Some(&id) = self.index.get(&span) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);
        self.order.get(id).map(|entry| entry.value)
    }

    /// Inserts or overwrites `span`, marking it most recently used.
    ///
    /// Returns the previous value if the span was already cached. If the
    /// insert pushed the entry count above capacity, the least recently
    /// used entry is evicted after the insert — exactly one per call.
    pub fn put(&mut self, span: Span, value: i64) -> Option<i64> {
        if let Some(&id) = self.index.get(&span) {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();

            self.order.move_to_front(id);
            let entry = self.order.get_mut(id)?;
            return Some(std::mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();

        let id = self.order.push_front(Entry { span, value });
        self.index.insert(span, id);

        if self.order.len() > self.capacity
            && let Some(evicted) = self.order.pop_back()
        {
            self.index.remove(&evicted.span);
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
        }

        None
    }

    /// Removes every cached span that covers `position`.
    ///
    /// Returns the number of entries removed. Survivors keep their relative
    /// recency order.
    pub fn invalidate_covering(&mut self, position: u32) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_invalidate_call();

        let mut stale: Vec<SlotId> = Vec::new();
        for (id, entry) in self.order.iter_entries() {
            #[cfg(feature = "metrics")]
            self.metrics.record_invalidate_scan_step();
            if entry.span.covers(position) {
                stale.push(id);
            }
        }

        let removed = stale.len();
        for id in stale {
            if let Some(entry) = self.order.remove(id) {
                self.index.remove(&entry.span);
                #[cfg(feature = "metrics")]
                self.metrics.record_invalidated_entry();
            }
        }
        removed
    }

    /// Read-only lookup without a recency update.
    pub fn peek(&self, span: Span) -> Option<i64> {
        let &id = self.index.get(&span)?;
        self.order.get(id).map(|entry| entry.value)
    }

    /// The least recently used entry, without removing or touching it.
    pub fn peek_lru(&self) -> Option<(Span, i64)> {
        self.order.back().map(|entry| (entry.span, entry.value))
    }

    /// Returns `true` if `span` is cached. Does not affect recency.
    pub fn contains(&self, span: Span) -> bool {
        self.index.contains_key(&span)
    }

    /// Current number of cached spans.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Cached spans from most to least recently used.
    pub fn spans_by_recency(&self) -> impl Iterator<Item = Span> {
        self.order.iter_entries().map(|(_, entry)| entry.span)
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> IntervalLruMetricsSnapshot {
        IntervalLruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_updates: self.metrics.put_updates,
            put_new: self.metrics.put_new,
            evicted_entries: self.metrics.evicted_entries,
            invalidate_calls: self.metrics.invalidate_calls,
            invalidated_entries: self.metrics.invalidated_entries,
            invalidate_scan_steps: self.metrics.invalidate_scan_steps,
            cache_len: self.order.len(),
            capacity: self.capacity,
        }
    }

    /// Verifies index/recency-list coherence and the capacity bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.order.len() > self.capacity {
            return Err(InvariantError::new("entry count exceeds capacity"));
        }
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new("index and recency list lengths differ"));
        }
        for (id, entry) in self.order.iter_entries() {
            if self.index.get(&entry.span) != Some(&id) {
                return Err(InvariantError::new(format!(
                    "index does not map span {} to its list node",
                    entry.span
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{err}");
        }
        self.order.debug_validate_invariants();
    }
}

impl Default for IntervalLruCache {
    /// Creates a cache with [`DEFAULT_CAPACITY`] entries.
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for IntervalLruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalLruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl KvCache<Span, i64> for IntervalLruCache {
    #[inline]
    fn get(&mut self, key: &Span) -> Option<i64> {
        IntervalLruCache::get(self, *key)
    }

    #[inline]
    fn insert(&mut self, key: Span, value: i64) -> Option<i64> {
        self.put(key, value)
    }

    #[inline]
    fn len(&self) -> usize {
        IntervalLruCache::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> IntervalLruCache {
        IntervalLruCache::with_capacity(capacity).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = IntervalLruCache::with_capacity(0).unwrap_err();
            assert!(err.to_string().contains("capacity"));
        }

        #[test]
        fn default_uses_documented_capacity() {
            let cache = IntervalLruCache::default();
            assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
            assert!(cache.is_empty());
        }

        #[test]
        fn reports_configured_capacity() {
            assert_eq!(cache(7).capacity(), 7);
        }

        #[test]
        fn check_invariants_passes_on_live_cache() {
            let mut c = cache(3);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);
            c.get(Span::new(0, 1));
            c.put(Span::new(4, 5), 3);
            c.put(Span::new(6, 7), 4);
            assert!(c.check_invariants().is_ok());
        }
    }

    mod basic_behavior {
        use super::*;

        #[test]
        fn miss_on_empty_cache() {
            let mut c = cache(4);
            assert_eq!(c.get(Span::new(0, 1)), None);
            assert!(c.is_empty());
        }

        #[test]
        fn put_then_get_round_trips() {
            let mut c = cache(4);
            assert_eq!(c.put(Span::new(2, 5), 42), None);
            assert_eq!(c.get(Span::new(2, 5)), Some(42));
            assert_eq!(c.len(), 1);
        }

        #[test]
        fn put_existing_overwrites_and_returns_previous() {
            let mut c = cache(4);
            c.put(Span::new(0, 3), 10);
            assert_eq!(c.put(Span::new(0, 3), 20), Some(10));
            assert_eq!(c.len(), 1);
            assert_eq!(c.get(Span::new(0, 3)), Some(20));
        }

        #[test]
        fn miss_has_no_side_effect() {
            let mut c = cache(2);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);

            assert_eq!(c.get(Span::new(7, 9)), None);

            // LRU order unchanged: (0,1) still evicts first.
            c.put(Span::new(4, 5), 3);
            assert!(!c.contains(Span::new(0, 1)));
            assert!(c.contains(Span::new(2, 3)));
        }

        #[test]
        fn peek_does_not_touch_recency() {
            let mut c = cache(2);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);

            assert_eq!(c.peek(Span::new(0, 1)), Some(1));

            c.put(Span::new(4, 5), 3);
            assert!(!c.contains(Span::new(0, 1)), "peek must not refresh recency");
        }

        #[test]
        fn clear_empties_cache() {
            let mut c = cache(4);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);
            c.clear();
            assert!(c.is_empty());
            assert_eq!(c.get(Span::new(0, 1)), None);
            c.debug_validate_invariants();
        }
    }

    mod eviction {
        use super::*;

        #[test]
        fn capacity_bound_holds_after_each_put() {
            let mut c = cache(3);
            for i in 0..10u32 {
                c.put(Span::new(i, i + 1), i as i64);
                assert!(c.len() <= 3);
                c.debug_validate_invariants();
            }
        }

        #[test]
        fn oldest_inserted_is_evicted_first() {
            let mut c = cache(3);
            for i in 0..4u32 {
                c.put(Span::new(i, i), i as i64);
            }
            assert!(!c.contains(Span::new(0, 0)));
            for i in 1..4u32 {
                assert!(c.contains(Span::new(i, i)));
            }
        }

        #[test]
        fn get_refreshes_recency_before_eviction() {
            let mut c = cache(2);
            c.put(Span::new(0, 2), 5);
            c.put(Span::new(1, 3), 9);

            assert_eq!(c.get(Span::new(0, 2)), Some(5));
            c.put(Span::new(4, 6), 1);

            assert_eq!(c.get(Span::new(1, 3)), None);
            assert_eq!(c.get(Span::new(0, 2)), Some(5));
            assert_eq!(c.get(Span::new(4, 6)), Some(1));
        }

        #[test]
        fn put_existing_does_not_evict() {
            let mut c = cache(2);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);
            c.put(Span::new(0, 1), 10);
            assert_eq!(c.len(), 2);
            assert!(c.contains(Span::new(2, 3)));
        }

        #[test]
        fn eviction_removes_exactly_one() {
            let mut c = cache(5);
            for i in 0..5u32 {
                c.put(Span::new(i, i), 0);
            }
            c.put(Span::new(9, 9), 0);
            assert_eq!(c.len(), 5);
        }

        #[test]
        fn peek_lru_matches_eviction_order() {
            let mut c = cache(3);
            c.put(Span::new(0, 0), 0);
            c.put(Span::new(1, 1), 1);
            c.put(Span::new(2, 2), 2);

            assert_eq!(c.peek_lru(), Some((Span::new(0, 0), 0)));
            c.get(Span::new(0, 0));
            assert_eq!(c.peek_lru(), Some((Span::new(1, 1), 1)));
        }

        #[test]
        fn capacity_one_keeps_only_newest() {
            let mut c = cache(1);
            c.put(Span::new(0, 0), 0);
            c.put(Span::new(1, 1), 1);
            assert_eq!(c.len(), 1);
            assert!(!c.contains(Span::new(0, 0)));
            assert!(c.contains(Span::new(1, 1)));
        }
    }

    mod invalidation {
        use super::*;

        #[test]
        fn removes_all_covering_spans() {
            let mut c = cache(8);
            c.put(Span::new(0, 4), 1);
            c.put(Span::new(2, 6), 2);
            c.put(Span::new(3, 3), 3);
            c.put(Span::new(5, 9), 4);

            let removed = c.invalidate_covering(3);
            assert_eq!(removed, 3);
            assert!(!c.contains(Span::new(0, 4)));
            assert!(!c.contains(Span::new(2, 6)));
            assert!(!c.contains(Span::new(3, 3)));
            assert!(c.contains(Span::new(5, 9)));
            c.debug_validate_invariants();
        }

        #[test]
        fn endpoints_count_as_covered() {
            let mut c = cache(4);
            c.put(Span::new(2, 5), 1);
            assert_eq!(c.invalidate_covering(2), 1);

            c.put(Span::new(2, 5), 1);
            assert_eq!(c.invalidate_covering(5), 1);
            assert!(c.is_empty());
        }

        #[test]
        fn disjoint_spans_survive() {
            let mut c = cache(4);
            c.put(Span::new(0, 2), 1);
            c.put(Span::new(4, 6), 2);

            assert_eq!(c.invalidate_covering(3), 0);
            assert!(c.contains(Span::new(0, 2)));
            assert!(c.contains(Span::new(4, 6)));
        }

        #[test]
        fn survivors_keep_relative_recency() {
            let mut c = cache(4);
            c.put(Span::new(0, 0), 0);
            c.put(Span::new(5, 5), 5);
            c.put(Span::new(2, 3), 2);
            c.put(Span::new(7, 8), 7);

            // Drops only (2, 3); order of the rest is unchanged.
            assert_eq!(c.invalidate_covering(2), 1);
            let order: Vec<Span> = c.spans_by_recency().collect();
            assert_eq!(order, vec![Span::new(7, 8), Span::new(5, 5), Span::new(0, 0)]);
        }

        #[test]
        fn invalidate_on_empty_cache_is_noop() {
            let mut c = cache(2);
            assert_eq!(c.invalidate_covering(0), 0);
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_reflects_operations() {
            let mut c = cache(2);
            c.put(Span::new(0, 1), 1);
            c.put(Span::new(2, 3), 2);
            c.put(Span::new(4, 5), 3); // evicts (0, 1)
            c.get(Span::new(2, 3));
            c.get(Span::new(0, 1));
            c.invalidate_covering(2);

            let snap = c.metrics_snapshot();
            assert_eq!(snap.put_calls, 3);
            assert_eq!(snap.put_new, 3);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.invalidate_calls, 1);
            assert_eq!(snap.invalidated_entries, 1);
            assert_eq!(snap.cache_len, 1);
            assert_eq!(snap.capacity, 2);
            assert!(snap.hit_rate() > 0.0);
        }
    }
}
