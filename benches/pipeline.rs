use criterion::{criterion_group, criterion_main, Criterion};
use sigil_core::{assemble, count_passages, Crown, Evenness, FragmentSet, Grid, Seed, TraitSet};

fn bench_pipeline(c: &mut Criterion) {
    let seed = Seed::from_hex("6c1f0e885f1c3a2b9d4e7f60a1b2c3d4e5f60718293a4b5c6d7e8f9001122334")
        .unwrap();
    let grid = Grid::decode(&seed);
    let fragments = FragmentSet::builtin();

    c.bench_function("decode_grid", |b| b.iter(|| Grid::decode(&seed)));

    c.bench_function("evenness", |b| b.iter(|| Evenness::score(&seed)));

    c.bench_function("count_passages", |b| b.iter(|| count_passages(&grid)));

    c.bench_function("crown_analyze", |b| b.iter(|| Crown::analyze(&grid)));

    c.bench_function("assemble_document", |b| {
        b.iter(|| assemble(&seed, &grid, &fragments))
    });

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let grid = Grid::decode(&seed);
            let traits = TraitSet::from_grid(&seed, &grid);
            (traits, assemble(&seed, &grid, &fragments))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
