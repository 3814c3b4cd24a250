use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes128_core::gf::{gmul, multiply};
use aes128_core::{
    encrypt_block, encrypt_block_with, expand_key, Aes128Key, Bitwise, Encryptor,
    EncryptorConfig,
};

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256");
    group.bench_function("bitwise_multiply", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for x in 0..=255u8 {
                acc ^= gmul(black_box(x), 0x57);
            }
            acc
        });
    });
    group.bench_function("table_multiply", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for x in 0..=255u8 {
                acc ^= multiply(black_box(x), 0x57);
            }
            acc
        });
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let expanded = expand_key(&key);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(black_box(&key))));
    group.bench_function("encrypt_block_table", |b| {
        b.iter(|| encrypt_block(black_box(&block), &expanded))
    });
    group.bench_function("encrypt_block_bitwise", |b| {
        b.iter(|| encrypt_block_with::<Bitwise>(black_box(&block), &expanded))
    });
    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let key = Aes128Key::from([1u8; 16]);
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut data = vec![0u8; 1 << 20];
    rng.fill_bytes(&mut data);

    let sequential = Encryptor::with_key(&key);
    let parallel = Encryptor::new(
        EncryptorConfig {
            parallel: true,
            ..EncryptorConfig::default()
        },
        &key,
    );

    let mut group = c.benchmark_group("buffer_1mib");
    group.sample_size(20);
    group.bench_function("sequential", |b| b.iter(|| sequential.encrypt(&data)));
    group.bench_function("parallel", |b| b.iter(|| parallel.encrypt(&data)));
    group.finish();
}

criterion_group!(benches, bench_field, bench_block, bench_buffer);
criterion_main!(benches);
