use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use cham_core::{encrypt_block, expand_key, Block, Cham128, Cham128Key};

fn bench_key_schedule(c: &mut Criterion) {
    let key = Cham128Key::from([0u8; 16]);
    c.bench_function("expand_key", |b| b.iter(|| expand_key(black_box(&key))));
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let key = Cham128Key::from(rng.gen::<[u8; 16]>());
    let round_keys = expand_key(&key);
    let cipher = Cham128::new(&key);
    let block: Block = rng.gen();

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(black_box(&block)));
    });
    group.bench_function("encrypt_bytes", |b| {
        let mut data = [0u8; 16];
        rng.fill(&mut data[..]);
        b.iter(|| cipher.encrypt_bytes(black_box(&mut data)));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
