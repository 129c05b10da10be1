//! Benchmark for the ZR5 cascade

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use zr5_core::{Algorithm, hash, hash_batch};

fn bench_hash(c: &mut Criterion) {
    // 80-byte block header, the usual proof-of-work input
    let input = [0x5Au8; 80];

    c.bench_function("zr5_single", |b| b.iter(|| hash(black_box(&input))));
}

fn bench_hash_varying_input(c: &mut Criterion) {
    c.bench_function("zr5_varying", |b| {
        let mut nonce: u32 = 0;
        b.iter(|| {
            let mut input = [0u8; 80];
            input[76..].copy_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            hash(black_box(&input))
        })
    });
}

fn bench_stages(c: &mut Criterion) {
    let block = [1u8; 64];
    let mut group = c.benchmark_group("stage");
    for algo in Algorithm::ALL {
        group.bench_function(algo.name(), |b| b.iter(|| algo.hash512(black_box(&block))));
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<[u8; 80]> = (0u32..1024)
        .map(|i| {
            let mut input = [0u8; 80];
            input[76..].copy_from_slice(&i.to_le_bytes());
            input
        })
        .collect();

    c.bench_function("zr5_batch_1024", |b| b.iter(|| hash_batch(black_box(&inputs))));
}

criterion_group!(
    benches,
    bench_hash,
    bench_hash_varying_input,
    bench_stages,
    bench_batch
);
criterion_main!(benches);
