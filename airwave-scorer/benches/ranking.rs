//! Criterion benchmarks for candidate ranking.
//!
//! Measures scoring and sorting time across scan sizes (16, 64, 256
//! candidates) to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package airwave-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use airwave_core::{CandidateScorer, ScoringConfig};
use airwave_scorer::BssScorer;

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_candidates, preferred_channels};

/// Scan sizes to benchmark.
const SCAN_SIZES: &[usize] = &[16, 64, 256];

/// Benchmark a full ranking pass for several scan sizes.
///
/// Inputs are generated once per size; every iteration ranks a fresh copy so
/// the sort never starts from an already ordered slice.
fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let config = ScoringConfig::default();
    let scorer = BssScorer::standard();
    let pcl = preferred_channels();

    for &size in SCAN_SIZES {
        let candidates = generate_candidates(size, BENCHMARK_SEED);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small scan sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("candidates", size), &size, |b, _| {
            b.iter(|| {
                let mut scan = candidates.clone();
                scorer.rank(&config, &mut scan, &pcl);
                scan
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
