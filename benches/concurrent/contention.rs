use criterion::{BenchmarkId, Criterion};
use parklot::{ParkingLevel, ParkingLot, VehicleType};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

/// Register benchmarks that test the allocator under thread contention
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ParkingLot - Contention Patterns");

    // Concurrent park/exit churn with increasing thread counts
    for thread_count in [2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("park_exit_churn", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| measure_churn(thread_count, iters, 1));
            },
        );
    }

    // Single level (hot) versus one level per thread (distributed)
    for level_count in [1, 4].iter() {
        group.bench_with_input(
            BenchmarkId::new("level_contention", level_count),
            level_count,
            |b, &level_count| {
                b.iter_custom(|iters| measure_churn(4, iters, level_count));
            },
        );
    }

    group.finish();
}

/// Measures wall time for `iters` park/exit round trips spread across
/// `thread_count` worker threads on a lot with `level_count` levels.
fn measure_churn(thread_count: usize, iters: u64, level_count: u32) -> Duration {
    let levels = (1..=level_count)
        .map(|number| ParkingLevel::new(number, 100))
        .collect();
    let lot = Arc::new(ParkingLot::new(levels));
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread
    let iterations_per_thread = iters.div_ceil(thread_count as u64);

    let mut handles = Vec::with_capacity(thread_count);
    for thread_id in 0..thread_count {
        let thread_lot = Arc::clone(&lot);
        let thread_barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            // Wait for all threads to be ready
            thread_barrier.wait();

            for i in 0..iterations_per_thread {
                let plate = format!("T{thread_id}-{i}");
                if thread_lot.park(VehicleType::Car, &plate).is_ok() {
                    let _ = thread_lot.exit(&plate);
                }
            }
        }));
    }

    barrier.wait();
    let start = Instant::now();
    for handle in handles {
        handle.join().unwrap();
    }
    start.elapsed()
}
