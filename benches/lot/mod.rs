mod park_exit;

use criterion::Criterion;

/// Register all single-threaded lot benchmarks
pub fn register_benchmarks(c: &mut Criterion) {
    park_exit::register_benchmarks(c);
}
