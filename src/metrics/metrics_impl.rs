/// Counters for `IntervalLruCache`.
///
/// All recorded operations take `&mut self` on the cache, so plain `u64`
/// fields suffice; no interior mutability is involved.
#[derive(Debug, Default)]
pub struct IntervalLruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub put_calls: u64,
    pub put_updates: u64,
    pub put_new: u64,

    pub evicted_entries: u64,

    pub invalidate_calls: u64,
    pub invalidated_entries: u64,
    pub invalidate_scan_steps: u64,
}

impl IntervalLruMetrics {
    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_put_update(&mut self) {
        self.put_calls += 1;
        self.put_updates += 1;
    }

    #[inline]
    pub fn record_put_new(&mut self) {
        self.put_calls += 1;
        self.put_new += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    pub fn record_invalidate_call(&mut self) {
        self.invalidate_calls += 1;
    }

    #[inline]
    pub fn record_invalidate_scan_step(&mut self) {
        self.invalidate_scan_steps += 1;
    }

    #[inline]
    pub fn record_invalidated_entry(&mut self) {
        self.invalidated_entries += 1;
    }
}

/// Counters for `SplayCache`, including the rotation-case split.
///
/// The zig / zig-zig / zig-zag counters count splay *steps*; a zig-zig or
/// zig-zag step performs two rotations, a zig step one.
#[derive(Debug, Default)]
pub struct SplayMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub splay_calls: u64,
    pub zig_steps: u64,
    pub zig_zig_steps: u64,
    pub zig_zag_steps: u64,
}

impl SplayMetrics {
    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    #[inline]
    pub fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    #[inline]
    pub fn record_splay_call(&mut self) {
        self.splay_calls += 1;
    }

    #[inline]
    pub fn record_zig(&mut self) {
        self.zig_steps += 1;
    }

    #[inline]
    pub fn record_zig_zig(&mut self) {
        self.zig_zig_steps += 1;
    }

    #[inline]
    pub fn record_zig_zag(&mut self) {
        self.zig_zag_steps += 1;
    }
}
