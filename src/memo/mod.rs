pub mod range;
pub mod recursive;

pub use range::{CachedSeries, raw_range_sum};
pub use recursive::{TableMemo, fibonacci};
