//! Benchmark grid construction and path queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridseek::{EngineConfig, GridPos, PathfindingEngine, TileMap, WorldPos};

/// Engine over a seeded random map of the given size.
fn engine_for(size: u32, density: f64) -> (PathfindingEngine, WorldPos, WorldPos) {
    let map = TileMap::random(size, size, density, 12345).expect("valid density");
    let mut engine = PathfindingEngine::new(EngineConfig::for_testing());
    engine
        .load_map(&map, map.world_width(), map.world_height())
        .expect("valid map size");

    let grid = engine.grid().expect("grid loaded");
    let last = size as i32 - 1;
    let start = grid.cell(GridPos::new(0, 0)).expect("inside").world();
    let goal = grid.cell(GridPos::new(last, last)).expect("inside").world();
    (engine, start, goal)
}

fn bench_load_map(c: &mut Criterion) {
    let map = TileMap::random(128, 128, 0.25, 12345).expect("valid density");
    let mut engine = PathfindingEngine::new(EngineConfig::default());

    c.bench_function("load_map_128", |b| {
        b.iter(|| {
            engine
                .load_map(black_box(&map), map.world_width(), map.world_height())
                .expect("valid map size");
        })
    });
}

fn bench_find_path(c: &mut Criterion) {
    let (engine, start, goal) = engine_for(64, 0.25);

    c.bench_function("find_path_64", |b| {
        b.iter(|| {
            let path = engine.find_path(black_box(start), black_box(goal));
            black_box(path)
        })
    });
}

fn bench_find_path_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path_size");

    for size in [16u32, 32, 64, 128].iter() {
        let (engine, start, goal) = engine_for(*size, 0.2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let path = engine.find_path(black_box(start), black_box(goal));
                black_box(path)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_map, bench_find_path, bench_find_path_sizes);
criterion_main!(benches);
