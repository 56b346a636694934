//! Hashing and token generation benchmarks
//!
//! - **Digest throughput**: each built-in algorithm over several payload sizes
//! - **Stream hashing**: cursor-backed streams vs. in-memory bytes
//! - **Secure hashing**: salted SHA-256, salt generation and verification
//! - **Tokens**: default and large token generation
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench --bench hashing_bench
//! cargo bench --bench hashing_bench -- digest_throughput
//! ```

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulsearc_hashing::{HashAlgorithm, SecureHasher, TokenGenerator};

// ============================================================================
// Constants for benchmarking
// ============================================================================

const SMALL_DATA: usize = 16; // 16 bytes - password-sized
const MEDIUM_DATA: usize = 1024; // 1 KB
const LARGE_DATA: usize = 64 * 1024; // 64 KB
const XLARGE_DATA: usize = 1024 * 1024; // 1 MB

// ============================================================================
// Digest Benchmarks
// ============================================================================

fn bench_digest_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_throughput");
    let hasher = SecureHasher::new();

    for size in [SMALL_DATA, MEDIUM_DATA, LARGE_DATA, XLARGE_DATA] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for algorithm in HashAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &data, |b, data| {
                b.iter(|| black_box(hasher.hash(algorithm, black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_stream_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_hashing");
    let hasher = SecureHasher::new();
    let data = vec![0x3Cu8; XLARGE_DATA];
    group.throughput(Throughput::Bytes(XLARGE_DATA as u64));

    group.bench_function("sha256_bytes", |b| {
        b.iter(|| black_box(hasher.sha256_hash(black_box(&data))));
    });

    group.bench_function("sha256_stream", |b| {
        let mut cursor = Cursor::new(data.as_slice());
        b.iter(|| black_box(hasher.sha256_hash_stream(&mut cursor)));
    });

    group.finish();
}

// ============================================================================
// Secure Hash Benchmarks
// ============================================================================

fn bench_secure_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("secure_hash");
    let hasher = SecureHasher::new();

    group.bench_function("generate_salt", |b| {
        b.iter(|| black_box(hasher.generate_salt()));
    });

    group.bench_function("secure_hash", |b| {
        b.iter(|| black_box(hasher.secure_hash(black_box("correct horse battery staple"))));
    });

    let stored = hasher.secure_hash("correct horse battery staple");
    group.bench_function("verify_secure_hash", |b| {
        b.iter(|| {
            black_box(hasher.verify_secure_hash(black_box("correct horse battery staple"), &stored))
        });
    });

    group.finish();
}

// ============================================================================
// Token Benchmarks
// ============================================================================

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");
    let generator = TokenGenerator::new();

    group.bench_function("generate_default", |b| {
        b.iter(|| black_box(generator.generate()));
    });

    group.bench_function("generate_256", |b| {
        b.iter(|| black_box(generator.generate_with_length(256)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_digest_throughput,
    bench_stream_hashing,
    bench_secure_hash,
    bench_tokens
);
criterion_main!(benches);
