//! memokit: memoization cache primitives.
//!
//! Two strategies for re-serving overlapping computations: a bounded
//! interval-keyed LRU cache with positional invalidation
//! ([`cache::interval_lru`]), and an unbounded self-adjusting splay-tree
//! cache ([`cache::splay`]). The [`memo`] module layers the computations
//! they exist to serve — cached range sums over a mutable sequence, and
//! memoized recursive functions — on top.
//!
//! Everything is single-threaded and `&mut self`; there is no internal
//! locking.

pub mod cache;
pub mod ds;
pub mod error;
pub mod memo;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
