pub use crate::cache::interval_lru::{DEFAULT_CAPACITY, IntervalLruCache, Span};
pub use crate::cache::splay::SplayCache;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::memo::range::{CachedSeries, raw_range_sum};
pub use crate::memo::recursive::{TableMemo, fibonacci};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{IntervalLruMetricsSnapshot, SplayMetricsSnapshot};
pub use crate::traits::KvCache;
