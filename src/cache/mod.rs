pub mod interval_lru;
pub mod splay;

pub use interval_lru::{IntervalLruCache, Span};
pub use splay::SplayCache;
