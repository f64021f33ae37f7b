use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meetup::agent::{Agent, HealthCategory};
use meetup::meetup::meetup;
use std::hint::black_box;

// Cycles through the categories so every rule fires.
fn listing(population: usize) -> Vec<Agent> {
    (0..population)
        .map(|i| {
            let category = HealthCategory::ALL[i % HealthCategory::ALL.len()];
            Agent::new(format!("agent{i}"), category)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("meetup round");
    for population in [1_000, 100_000] {
        let agents = listing(population);
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &agents,
            |bencher, agents| bencher.iter_with_large_drop(|| meetup(black_box(agents))),
        );
    }
    group.finish();
}

criterion_group!(meetup_benches, criterion_benchmark);
criterion_main!(meetup_benches);
