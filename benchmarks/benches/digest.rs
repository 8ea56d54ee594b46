// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use digestive::Algorithm;

const MESSAGE_LENS: [usize; 5] = [0, 64, 1024, 16 * 1024, 1024 * 1024];

fn benchmark_family(c: &mut Criterion, group_name: &str, algorithms: &[Algorithm]) {
    let mut group = c.benchmark_group(group_name);

    for &len in MESSAGE_LENS.iter() {
        let data = vec![0xA5u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        for &algorithm in algorithms {
            group.bench_with_input(format!("{algorithm} {len} bytes"), &data, |b, data| {
                b.iter(|| {
                    let digest = if algorithm.is_xof() {
                        algorithm.hash_xof(black_box(data), 256)
                    } else {
                        algorithm.hash(black_box(data))
                    };
                    black_box(digest.expect("hash failed"));
                });
            });
        }
    }
    group.finish();
}

fn benchmark_sha1(c: &mut Criterion) {
    benchmark_family(c, "sha1", &[Algorithm::Sha1]);
}

fn benchmark_sha2(c: &mut Criterion) {
    benchmark_family(c, "sha2", &[
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Sha512_256,
    ]);
}

fn benchmark_sha3(c: &mut Criterion) {
    benchmark_family(c, "sha3", &[Algorithm::Sha3_256, Algorithm::Sha3_512]);
}

fn benchmark_shake(c: &mut Criterion) {
    benchmark_family(c, "shake", &[Algorithm::Shake128, Algorithm::Shake256]);
}

fn benchmark_shake_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("shake128_output");

    // Squeeze cost: one permutation per 168 output bytes
    for out_len in [32, 168, 1024, 16 * 1024].iter() {
        group.throughput(Throughput::Bytes(*out_len as u64));
        group.bench_with_input(format!("{} bytes out", out_len), out_len, |b, &out_len| {
            b.iter(|| {
                black_box(digestive::shake128(black_box(b"seed"), 8 * out_len));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sha1,
    benchmark_sha2,
    benchmark_sha3,
    benchmark_shake,
    benchmark_shake_output
);
criterion_main!(benches);
