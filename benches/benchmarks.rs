//! Performance benchmarks for treejson

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use treejson::test_utils::TestDir;
use treejson::{BuilderConfig, OutputConfig, TreeBuilder, to_json};

fn bench_build(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(10, 5, 20);

    let mut group = c.benchmark_group("build");

    let unfiltered = TreeBuilder::new(BuilderConfig::unfiltered()).unwrap();
    group.bench_function("unfiltered", |b| {
        b.iter(|| unfiltered.build(black_box(dir.path())).unwrap())
    });

    let colored = TreeBuilder::new(BuilderConfig::default()).unwrap();
    group.bench_function("filtered_colored", |b| {
        b.iter(|| colored.build(black_box(dir.path())).unwrap())
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(10, 5, 20);
    let tree = TreeBuilder::new(BuilderConfig::default())
        .unwrap()
        .build(dir.path())
        .unwrap();

    let mut group = c.benchmark_group("encode");
    group.bench_function("compact", |b| {
        b.iter(|| to_json(black_box(&tree), &OutputConfig { pretty: false }).unwrap())
    });
    group.bench_function("pretty", |b| {
        b.iter(|| to_json(black_box(&tree), &OutputConfig { pretty: true }).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_encode);
criterion_main!(benches);
