use criterion::Criterion;
use parklot::{ParkingLevel, ParkingLot, SpotSize, VehicleType};
use std::hint::black_box;

/// Register benchmarks for the core park/exit lifecycle
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ParkingLot - Park and Exit");

    // Benchmark filling a level with cars
    group.bench_function("park_until_full", |b| {
        b.iter(|| {
            let lot = ParkingLot::new(vec![ParkingLevel::new(1, 100)]);
            for i in 0..80 {
                let _ = black_box(lot.park(VehicleType::Car, &format!("CAR-{i}")));
            }
        })
    });

    // Benchmark complete park/exit round trips
    group.bench_function("park_exit_round_trip", |b| {
        let lot = ParkingLot::new(vec![ParkingLevel::new(1, 100)]);
        b.iter(|| {
            lot.park(VehicleType::Car, "BENCH-CAR").unwrap();
            black_box(lot.exit("BENCH-CAR").unwrap());
        })
    });

    // Benchmark the mixed-vehicle matching policy
    group.bench_function("park_mixed_vehicle_types", |b| {
        b.iter(|| {
            let lot = ParkingLot::new(vec![ParkingLevel::new(1, 100)]);
            for i in 0..60 {
                let vehicle_type = match i % 3 {
                    0 => VehicleType::Motorcycle,
                    1 => VehicleType::Car,
                    _ => VehicleType::Truck,
                };
                let _ = black_box(lot.park(vehicle_type, &format!("V-{i}")));
            }
        })
    });

    // Benchmark the availability query against a busy lot
    group.bench_function("availability_query", |b| {
        let lot = ParkingLot::standard();
        for i in 0..150 {
            let _ = lot.park(VehicleType::Car, &format!("CAR-{i}"));
        }
        b.iter(|| {
            for size in SpotSize::ALL {
                black_box(lot.availability(size));
            }
        })
    });

    // Benchmark snapshot capture of a busy level
    group.bench_function("level_snapshot", |b| {
        let lot = ParkingLot::new(vec![ParkingLevel::new(1, 100)]);
        for i in 0..50 {
            let _ = lot.park(VehicleType::Car, &format!("CAR-{i}"));
        }
        b.iter(|| black_box(lot.levels()[0].snapshot()))
    });

    group.finish();
}
