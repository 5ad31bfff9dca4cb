use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{decrypt_block, encrypt_block, expand_key, Aes128Key};

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_block_cipher(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let key = Aes128Key::from(key_bytes);
    let ciphertext = encrypt_block(&block, &key);

    let mut group = c.benchmark_group("block_cipher");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &key));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ciphertext, &key));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block_cipher);
criterion_main!(benches);
