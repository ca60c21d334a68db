use criterion::{criterion_group, criterion_main};

mod concurrent;
mod lot;

use concurrent::register_benchmarks as register_concurrent_benchmarks;
use lot::register_benchmarks as register_lot_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_lot_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
