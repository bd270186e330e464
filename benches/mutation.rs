
use config_generator::generate_properties;
use criterion::{criterion_group, criterion_main, Criterion};
use propfile::Properties;

fn mutation_benchmarks(c: &mut Criterion) {
    let small = generate_properties(50);
    let large = generate_properties(1000);

    let mut group = c.benchmark_group("mutation");

    // Update an existing key in place
    group.bench_function("set_existing", |b| {
        let mut props = Properties::new();
        props.parse(&small);
        b.iter(|| props.set("int_1", "42"))
    });

    // Serialization - small source
    group.bench_function("serialize_small", |b| {
        let mut props = Properties::new();
        props.parse(&small);
        b.iter(|| props.serialize())
    });

    // Serialization - large source
    group.bench_function("serialize_large", |b| {
        let mut props = Properties::new();
        props.parse(&large);
        b.iter(|| props.serialize())
    });

    // Round-trip: parse -> mutate -> serialize -> parse
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let mut props = Properties::new();
            props.parse(&small);
            props.set("int_1", "42");
            let output = props.serialize();
            let mut props2 = Properties::new();
            props2.parse(&output);
        })
    });

    group.finish();
}

criterion_group!(benches, mutation_benchmarks);
criterion_main!(benches);
