use secp256k1_core::ecdsa;
use secp256k1_core::keys::{PrivateKey, PublicKey};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_sk(byte: u8) -> PrivateKey {
    let mut raw = [0u8; 32];
    raw[31] = byte;
    PrivateKey::from_bytes(raw).expect("nonzero byte decodes to a valid scalar")
}

pub fn bench_ecmult_gen(c: &mut Criterion) {
    let sk = sample_sk(7);
    c.bench_function("ecmult_gen: k*G", |b| {
        b.iter(|| black_box(&sk).public_key())
    });
}

pub fn bench_ecmult_const(c: &mut Criterion) {
    let sk = sample_sk(7);
    let pubkey = sample_sk(9).public_key();
    let tweak = sk.to_bytes();
    c.bench_function("ecmult_const: k*P", |b| {
        b.iter(|| black_box(&pubkey).tweak_mul(black_box(&tweak)))
    });
}

pub fn bench_ecmult_verify(c: &mut Criterion) {
    let sk = sample_sk(7);
    let pubkey = sk.public_key();
    let msg = [0x11u8; 32];
    let sig = ecdsa::sign(&msg, &sk);
    c.bench_function("ecmult: a*P + b*G (ecdsa verify)", |b| {
        b.iter(|| ecdsa::verify(black_box(&sig), black_box(&msg), black_box(&pubkey)))
    });
}

criterion_group!(
    benches,
    bench_ecmult_gen,
    bench_ecmult_const,
    bench_ecmult_verify
);
criterion_main!(benches);
