//! Workload generators for the range-sum benchmarks.
//!
//! Produces deterministic query streams without pulling in an external RNG:
//! mostly range-sum queries drawn from a small pool of hot spans, a sliver
//! of uniform cold spans, and a low fraction of point updates. The mix is
//! what makes the interval cache worth having — hot spans repeat, updates
//! are rare and localized.

use memokit::cache::interval_lru::Span;

#[derive(Debug, Clone, Copy)]
pub enum Query {
    /// Sum over a span.
    Range(Span),
    /// Point write, invalidating covering spans.
    Update { index: u32, value: i64 },
}

#[derive(Debug, Clone, Copy)]
pub struct QueryMixSpec {
    /// Length of the backing sequence.
    pub series_len: u32,
    /// Number of distinct hot spans.
    pub hot_pool: usize,
    /// Probability a range query reuses a hot span.
    pub hot_prob: f64,
    /// Probability a query is a point update.
    pub update_prob: f64,
    pub seed: u64,
}

impl Default for QueryMixSpec {
    fn default() -> Self {
        Self {
            series_len: 100_000,
            hot_pool: 30,
            hot_prob: 0.95,
            update_prob: 0.03,
            seed: 42,
        }
    }
}

impl QueryMixSpec {
    pub fn generator(self) -> QueryMixGenerator {
        QueryMixGenerator::new(self)
    }
}

#[derive(Debug, Clone)]
pub struct QueryMixGenerator {
    spec: QueryMixSpec,
    hot_spans: Vec<Span>,
    rng: XorShift64,
}

impl QueryMixGenerator {
    pub fn new(spec: QueryMixSpec) -> Self {
        let mut rng = XorShift64::new(spec.seed);
        let n = spec.series_len.max(2);
        // Hot spans straddle the midpoint so they overlap heavily.
        let hot_spans = (0..spec.hot_pool.max(1))
            .map(|_| {
                let left = (rng.next_u64() % u64::from(n / 2)) as u32;
                let right = (n / 2 + (rng.next_u64() % u64::from(n - n / 2)) as u32).min(n - 1);
                Span::new(left, right)
            })
            .collect();
        Self { spec, hot_spans, rng }
    }

    pub fn next_query(&mut self) -> Query {
        let n = self.spec.series_len.max(2);
        if self.rng.next_f64() < self.spec.update_prob {
            return Query::Update {
                index: (self.rng.next_u64() % u64::from(n)) as u32,
                value: (self.rng.next_u64() % 100) as i64 + 1,
            };
        }
        if self.rng.next_f64() < self.spec.hot_prob {
            let pick = (self.rng.next_u64() as usize) % self.hot_spans.len();
            return Query::Range(self.hot_spans[pick]);
        }
        let left = (self.rng.next_u64() % u64::from(n)) as u32;
        let right = left + (self.rng.next_u64() % u64::from(n - left)) as u32;
        Query::Range(Span::new(left, right))
    }

    /// Materializes `count` queries up front so the timed section does no
    /// generation work.
    pub fn take_queries(&mut self, count: usize) -> Vec<Query> {
        (0..count).map(|_| self.next_query()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}
