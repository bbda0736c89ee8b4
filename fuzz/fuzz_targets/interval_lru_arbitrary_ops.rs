#![no_main]

use libfuzzer_sys::fuzz_target;
use memokit::cache::interval_lru::{IntervalLruCache, Span};

// Fuzz arbitrary get / put / invalidate sequences against a model
//
// The model is a Vec of (span, value) pairs kept in recency order; the cache
// must agree with it on membership, values, and eviction victims.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut cache = match IntervalLruCache::with_capacity(capacity) {
        Ok(cache) => cache,
        Err(_) => return,
    };

    // front = MRU, like the cache's own order.
    let mut model: Vec<(Span, i64)> = Vec::new();

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 4;
        let a = u32::from(data[idx + 1] % 32);
        let b = u32::from(data[idx + 2] % 32);
        let span = Span::new(a.min(b), a.max(b));

        match op {
            0 => {
                let expected = model
                    .iter()
                    .position(|&(s, _)| s == span)
                    .map(|pos| model.remove(pos))
                    .inspect(|&entry| model.insert(0, entry))
                    .map(|(_, v)| v);
                assert_eq!(cache.get(span), expected);
            }
            1 => {
                let value = i64::from(data[idx + 1]) - i64::from(data[idx + 2]);
                if let Some(pos) = model.iter().position(|&(s, _)| s == span) {
                    model.remove(pos);
                }
                model.insert(0, (span, value));
                if model.len() > capacity {
                    let (evicted, _) = model.pop().expect("model over capacity");
                    cache.put(span, value);
                    assert!(!cache.contains(evicted));
                } else {
                    cache.put(span, value);
                }
            }
            2 => {
                let position = a;
                let before = model.len();
                model.retain(|(s, _)| !s.covers(position));
                let removed = cache.invalidate_covering(position);
                assert_eq!(removed, before - model.len());
            }
            _ => {
                assert_eq!(cache.contains(span), model.iter().any(|&(s, _)| s == span));
            }
        }

        assert_eq!(cache.len(), model.len());
        assert!(cache.len() <= capacity);
        idx += 3;
    }
});
