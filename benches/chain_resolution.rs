//! Benchmarks for pointer-chain resolution and patching over the emulated
//! target

use bedrock_trainer::{
    resolve_chain, Address, EmulatedProcess, OffsetChain, PatchEngine,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_target(levels: usize) -> (EmulatedProcess, OffsetChain) {
    let target = EmulatedProcess::new(Address::new(0x10_0000), 0x10000);
    let base = target.base();

    let mut current = base;
    let mut offsets = Vec::with_capacity(levels + 1);
    for i in 0..levels {
        let next = base.add((i + 1) * 0x400);
        target.plant_pointer(current.add(0x10), next).unwrap();
        offsets.push(0x10);
        current = next;
    }
    offsets.push(0x8);

    (target, OffsetChain::new(offsets))
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");

    for levels in [1usize, 3, 5] {
        let (target, chain) = build_target(levels);
        group.bench_function(format!("{} levels", levels), |b| {
            b.iter(|| {
                resolve_chain(&target, black_box(target.base()), black_box(&chain)).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_patch_cycle(c: &mut Criterion) {
    let target = EmulatedProcess::new(Address::new(0x10_0000), 0x1000);
    let engine = PatchEngine::new(&target);
    let destination = target.base().add(0x100);
    let payload = [0x90u8; 16];

    c.bench_function("apply_revert_16_bytes", |b| {
        b.iter(|| {
            let applied = engine.apply(black_box(destination), black_box(&payload)).unwrap();
            engine.revert(&applied).unwrap();
        })
    });
}

criterion_group!(benches, bench_resolve_chain, bench_patch_cycle);
criterion_main!(benches);
