use memokit::cache::interval_lru::{IntervalLruCache, Span};

fn main() {
    let mut cache = IntervalLruCache::with_capacity(2).expect("capacity is non-zero");

    cache.put(Span::new(0, 2), 5);
    cache.put(Span::new(1, 3), 9);

    if let Some(value) = cache.get(Span::new(0, 2)) {
        println!("hit (0, 2): {value}");
    }

    cache.put(Span::new(4, 6), 1);

    println!("contains (1, 3)? {}", cache.contains(Span::new(1, 3)));
}

// Expected output:
// hit (0, 2): 5
// contains (1, 3)? false
//
// Explanation: capacity=2; after get, span (0, 2) is MRU and (1, 3) is LRU.
// Inserting (4, 6) evicts (1, 3), so contains((1, 3)) is false.
