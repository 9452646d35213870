use std::io::{self, Cursor};

use aescrypt_algorithms::block::BlockCipher;
use aescrypt_algorithms::{Aes, Ctr, Iv};
use aescrypt_symmetric::{CipherMode, FileCipher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const KEY_SIZES: [(usize, &str); 3] = [(16, "AES-128"), (24, "AES-192"), (32, "AES-256")];

fn bench_aes_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-block");
    group.throughput(Throughput::Bytes(16));

    for (key_len, name) in KEY_SIZES {
        let cipher = Aes::new(&vec![0u8; key_len]).unwrap();

        group.bench_function(BenchmarkId::new("encrypt", name), |b| {
            let mut block = [0u8; 16];
            b.iter(|| cipher.encrypt_block(black_box(&mut block)).unwrap());
        });

        group.bench_function(BenchmarkId::new("decrypt", name), |b| {
            let mut block = [0u8; 16];
            b.iter(|| cipher.decrypt_block(black_box(&mut block)).unwrap());
        });
    }

    group.finish();
}

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-key-schedule");

    for (key_len, name) in KEY_SIZES {
        let key = vec![0x42u8; key_len];
        group.bench_function(name, |b| b.iter(|| Aes::new(black_box(&key)).unwrap()));
    }

    group.finish();
}

fn bench_aes_ctr(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-CTR");

    // Test different data sizes
    for size in [16usize, 256, 1024, 16384] {
        let data = vec![0u8; size];
        let iv = Iv::new([0u8; 16]);
        group.throughput(Throughput::Bytes(size as u64));

        for (key_len, name) in KEY_SIZES {
            let cipher = Aes::new(&vec![0u8; key_len]).unwrap();
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    let mut ctr = Ctr::new(&cipher, &iv).unwrap();
                    ctr.encrypt(black_box(data)).unwrap()
                });
            });
        }
    }

    group.finish();
}

fn bench_file_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("file-stream");
    let cipher = FileCipher::new(&[0u8; 32], CipherMode::Ecb).unwrap();

    for size in [1024usize, 65536] {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &data, |b, data| {
            b.iter(|| cipher.encrypt_stream(Cursor::new(data), io::sink()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_aes_block,
    bench_key_schedule,
    bench_aes_ctr,
    bench_file_stream
);
criterion_main!(benches);
