mod contention;

use criterion::Criterion;

/// Register all multi-threaded lot benchmarks
pub fn register_benchmarks(c: &mut Criterion) {
    contention::register_benchmarks(c);
}
