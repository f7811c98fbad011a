//! Criterion benchmarks for the elevator simulator and both policy
//! searches.
//!
//! The building-run benchmarks compare loading strategies on the same
//! crowd, mirroring the kind of comparative reporting a statistics harness
//! would do; the optimizer benchmarks measure search cost on deliberately
//! small buildings (partition search is factorial in the floor count).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_elevate::genetic::{GeneticConfig, GeneticOptimizer};
use u_elevate::partition::PartitionOptimizer;
use u_elevate::sim::{Building, Crowd, Elevator, Priorities, SimConfig};

fn office_crowd() -> Crowd {
    [(1, 100), (2, 100), (3, 20), (4, 100), (5, 50), (6, 20)]
        .into_iter()
        .collect()
}

fn office_config() -> SimConfig {
    SimConfig::default()
        .with_floor_count(6)
        .with_elevator_count(3)
        .with_capacity(10)
}

fn bench_building_run(c: &mut Criterion) {
    let config = office_config();
    let crowd = office_crowd();

    let systems: Vec<(&str, Vec<Elevator>)> = vec![
        (
            "random",
            (0..config.elevator_count).map(Elevator::random).collect(),
        ),
        (
            "split_priorities",
            vec![
                Elevator::priority(0, Priorities::from_floors([1, 4])),
                Elevator::priority(1, Priorities::from_floors([2, 5])),
                Elevator::priority(2, Priorities::from_floors([3, 6])),
            ],
        ),
        (
            "shared_priorities",
            (0..config.elevator_count)
                .map(|i| Elevator::priority(i, Priorities::from_floors(1..=6)))
                .collect(),
        ),
    ];

    let mut group = c.benchmark_group("building_run");
    for (name, elevators) in systems {
        let mut building = Building::new(elevators, crowd.clone(), config);
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(building.run(&mut rng).unwrap()));
        });
    }
    group.finish();
}

fn bench_partition_optimize(c: &mut Criterion) {
    // 4! = 24 simulated partitions per call.
    let config = SimConfig::default()
        .with_floor_count(4)
        .with_elevator_count(2)
        .with_capacity(10);
    let crowd: Crowd = [(1, 20), (2, 20), (3, 4), (4, 10)].into_iter().collect();
    let optimizer = PartitionOptimizer::new(crowd, config);

    c.bench_function("partition_optimize_4_floors", |b| {
        b.iter(|| black_box(optimizer.optimize().unwrap()))
    });
}

fn bench_genetic_optimize(c: &mut Criterion) {
    let sim = office_config();
    let crowd = office_crowd();
    let config = GeneticConfig::default()
        .with_population_size(30)
        .with_generations(5)
        .with_survival_rate(10)
        .with_seed(42);
    let optimizer = GeneticOptimizer::new(crowd, sim, config);

    c.bench_function("genetic_optimize_6_floors", |b| {
        b.iter(|| black_box(optimizer.optimize().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_building_run,
    bench_partition_optimize,
    bench_genetic_optimize
);
criterion_main!(benches);
