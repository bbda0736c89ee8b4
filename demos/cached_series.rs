use memokit::prelude::*;

fn main() {
    let mut series = CachedSeries::new(vec![1, 2, 3, 4, 5]);

    println!("sum [0, 4] = {}", series.range_sum(Span::new(0, 4)));
    println!("sum [3, 4] = {}", series.range_sum(Span::new(3, 4)));

    series.update(2, 100);

    println!("after update(2, 100):");
    println!("sum [0, 4] = {}", series.range_sum(Span::new(0, 4)));
    println!("sum [3, 4] = {}", series.range_sum(Span::new(3, 4)));
}

// Expected output:
// sum [0, 4] = 15
// sum [3, 4] = 9
// after update(2, 100):
// sum [0, 4] = 112
// sum [3, 4] = 9
//
// Explanation: the update invalidates only cached spans covering index 2;
// [0, 4] is recomputed while [3, 4] is still served from the cache.
