use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evopt::{
    config::SearchConfig,
    engine::{run_ga, run_gjo},
    fitness::Objective,
};

fn config_with_population(size: usize) -> SearchConfig {
    SearchConfig::builder()
        .objective(Objective::MartinAndGaddy)
        .bounds(-20.0, 20.0)
        .num_variables(2)
        .population_size(size)
        .epochs(20)
        .seed(42)
        .build()
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    for size in [10, 50, 100].iter() {
        let config = config_with_population(*size);
        group.bench_function(&format!("ga_pop_{}", size), |b| {
            b.iter(|| {
                let outcome = run_ga(black_box(&config));
                assert!(outcome.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_gjo(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjo");
    for size in [10, 50, 100].iter() {
        let config = config_with_population(*size);
        group.bench_function(&format!("gjo_pop_{}", size), |b| {
            b.iter(|| {
                let outcome = run_gjo(black_box(&config));
                assert!(outcome.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga, bench_gjo);
criterion_main!(benches);
