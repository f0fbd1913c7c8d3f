//! Criterion benchmarks for the two codec strategies.
//!
//! Run with:
//!   cargo bench --bench codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzfsekit::{Compressor, Strategy};

/// Word salad: compressible, but well under the probing path's 32x ceiling.
fn sample(len: usize) -> Vec<u8> {
    let words: [&[u8]; 8] = [
        b"lorem ",
        b"ipsum ",
        b"dolor ",
        b"sit ",
        b"amet ",
        b"consectetur ",
        b"adipiscing ",
        b"elit. ",
    ];
    let mut state = 0x2545_F491u32;
    let mut out = Vec::with_capacity(len + 16);
    while out.len() < len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.extend_from_slice(words[(state >> 29) as usize]);
    }
    out.truncate(len);
    out
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzfse");

    for &size in &[16_384usize, 262_144] {
        let data = sample(size);
        group.throughput(Throughput::Bytes(size as u64));

        for strategy in [Strategy::Direct, Strategy::Probing] {
            let compressor = Compressor::new(strategy);

            group.bench_with_input(
                BenchmarkId::new(format!("compress_{strategy}"), size),
                &data,
                |b, data| b.iter(|| compressor.compress(data).unwrap()),
            );

            let packed = compressor.compress(&data).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("decompress_{strategy}"), size),
                &packed,
                |b, packed| b.iter(|| compressor.decompress(packed).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
