//! Memoized evaluation of recursively defined scalar functions.
//!
//! [`fibonacci`] is read-through/write-through over any [`KvCache`]: each
//! call consults the cache first, and every computed value is inserted
//! before it is returned. Run against a [`SplayCache`] the recursion's own
//! access pattern keeps the hot suffix of keys near the root; run against a
//! [`TableMemo`] it degenerates to plain hash-table memoization, which is
//! the comparison baseline.
//!
//! Values wrap modulo 2^64 past n = 93; the key sequence the memoizer
//! consults is unaffected by the wrap.
//!
//! [`SplayCache`]: crate::cache::splay::SplayCache

use rustc_hash::FxHashMap;

use crate::traits::KvCache;

/// Memoized Fibonacci through `cache`.
///
/// # Example
///
/// ```
/// use memokit::cache::splay::SplayCache;
/// use memokit::memo::recursive::fibonacci;
///
/// let mut cache = SplayCache::new();
/// assert_eq!(fibonacci(10, &mut cache), 55);
/// // Every intermediate value is now cached.
/// assert_eq!(cache.len(), 11);
/// ```
pub fn fibonacci<C: KvCache<u64, u64>>(n: u64, cache: &mut C) -> u64 {
    if let Some(value) = cache.get(&n) {
        return value;
    }
    let value = if n < 2 {
        n
    } else {
        fibonacci(n - 1, cache).wrapping_add(fibonacci(n - 2, cache))
    };
    cache.insert(n, value);
    value
}

/// Unbounded flat hash-table memo, the baseline the splay cache is measured
/// against.
#[derive(Debug, Default)]
pub struct TableMemo {
    table: FxHashMap<u64, u64>,
}

impl TableMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl KvCache<u64, u64> for TableMemo {
    #[inline]
    fn get(&mut self, key: &u64) -> Option<u64> {
        self.table.get(key).copied()
    }

    #[inline]
    fn insert(&mut self, key: u64, value: u64) -> Option<u64> {
        self.table.insert(key, value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.table.len()
    }
}
