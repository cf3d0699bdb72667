//! Digest throughput benchmarks.
//!
//! Run with: cargo bench -p fipsha-crypto

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fipsha_crypto::sha2::{compute, Sha256, Sha512};
use fipsha_crypto::FileSource;

fn bench_sha2(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2");

    for size in [64usize, 1024, 16 * 1024, 1024 * 1024] {
        let data = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha256-buffer", size), &data, |bench, data| {
            bench.iter(|| Sha256::digest(data).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("sha256-stream", size), &data, |bench, data| {
            bench.iter(|| {
                let src = FileSource::<u32, _>::from_reader(Cursor::new(&data[..])).unwrap();
                compute::<Sha256, _>(src).unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("sha512-buffer", size), &data, |bench, data| {
            bench.iter(|| Sha512::digest(data).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha2);
criterion_main!(benches);
