//! Cached range sums over a mutable sequence.
//!
//! [`CachedSeries`] pairs a `Vec<i64>` with an [`IntervalLruCache`]:
//! `range_sum` is read-through (miss computes and stores), `update` writes
//! an element and invalidates exactly the cached spans that cover it. After
//! any sequence of updates, every cached sum either equals the true sum over
//! the current values or is absent — a stale hit is a bug, and the
//! invalidation path is what prevents it.
//!
//! Interval invalidation instead of whole-cache clearing costs a scan over
//! cached entries (bounded by capacity) but preserves hits on disjoint
//! spans after a localized write.
//!
//! Out-of-bounds spans or indices are caller precondition violations and
//! surface as slice index panics, not cache errors.

use crate::cache::interval_lru::{IntervalLruCache, Span};
use crate::error::ConfigError;

/// Sums `values[span.left ..= span.right]` without caching.
///
/// The uncached twin of [`CachedSeries::range_sum`], used by the comparison
/// benchmarks and by the cache itself on a miss.
///
/// # Panics
///
/// Panics if the span reaches past the end of `values`.
#[inline]
pub fn raw_range_sum(values: &[i64], span: Span) -> i64 {
    values[span.left as usize..=span.right as usize].iter().sum()
}

/// Mutable sequence with an interval-invalidating range-sum cache.
///
/// # Example
///
/// ```
/// use memokit::cache::interval_lru::Span;
/// use memokit::memo::range::CachedSeries;
///
/// let mut series = CachedSeries::new(vec![1, 2, 3, 4, 5]);
/// assert_eq!(series.range_sum(Span::new(0, 4)), 15);
///
/// series.update(2, 100);
/// assert_eq!(series.range_sum(Span::new(0, 4)), 112);
/// ```
#[derive(Debug)]
pub struct CachedSeries {
    values: Vec<i64>,
    cache: IntervalLruCache,
}

impl CachedSeries {
    /// Wraps `values` with a default-capacity cache.
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            cache: IntervalLruCache::default(),
        }
    }

    /// Wraps `values` with a cache holding at most `capacity` spans.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn with_cache_capacity(values: Vec<i64>, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            values,
            cache: IntervalLruCache::with_capacity(capacity)?,
        })
    }

    /// Sum over `span`, served from the cache when possible.
    ///
    /// A miss computes the sum over the current values and stores it before
    /// returning.
    pub fn range_sum(&mut self, span: Span) -> i64 {
        if let Some(sum) = self.cache.get(span) {
            return sum;
        }
        let sum = raw_range_sum(&self.values, span);
        self.cache.put(span, sum);
        sum
    }

    /// Writes `value` at `index` and drops every cached span covering it.
    pub fn update(&mut self, index: u32, value: i64) {
        self.values[index as usize] = value;
        self.cache.invalidate_covering(index);
    }

    /// The current values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying cache, for inspection.
    pub fn cache(&self) -> &IntervalLruCache {
        &self.cache
    }
}
