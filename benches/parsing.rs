
use config_generator::generate_properties;
use criterion::{criterion_group, criterion_main, Criterion};
use propfile::Properties;

fn parsing_benchmarks(c: &mut Criterion) {
    // Generate sources of different sizes
    let small = generate_properties(50);
    let medium = generate_properties(300);
    let large = generate_properties(1_000);
    let xlarge = generate_properties(10_000);

    let mut group = c.benchmark_group("parsing");

    group.bench_function("small_50_lines", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&small)
        })
    });

    group.bench_function("medium_300_lines", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&medium)
        })
    });

    group.bench_function("large_1000_lines", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&large)
        })
    });

    group.bench_function("xlarge_10000_lines", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&xlarge)
        })
    });

    group.finish();
}

fn perf_benchmark(c: &mut Criterion) {
    // 1 million lines - generated once, benchmarked separately
    let perf = generate_properties(1_000_000);

    let mut group = c.benchmark_group("perf");
    group.sample_size(10); // Fewer samples for very large sources

    group.bench_function("perf_1M_lines", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&perf)
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmarks, perf_benchmark);
criterion_main!(benches);
