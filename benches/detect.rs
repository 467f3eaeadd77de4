use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use descry::{detect, scores};
use rand::Rng;
use std::hint::black_box;

fn detect_ascii(c: &mut Criterion) {
    c.bench_function("detect/ascii", |b| {
        b.iter_batched_ref(
            || {
                let mut rng = rand::rng();
                (0..1024).map(|_| rng.random_range(0..0x80u8)).collect::<Vec<u8>>()
            },
            |data| detect(black_box(data.as_slice()), data.len()),
            BatchSize::SmallInput,
        )
    });
}

fn detect_gb2312(c: &mut Criterion) {
    c.bench_function("detect/gb2312", |b| {
        b.iter_batched_ref(
            || {
                let mut rng = rand::rng();
                let mut data = Vec::with_capacity(1024);
                while data.len() < 1024 {
                    data.push(rng.random_range(0xA1..=0xF7u8));
                    data.push(rng.random_range(0xA1..=0xFEu8));
                }
                data
            },
            |data| detect(black_box(data.as_slice()), data.len()),
            BatchSize::SmallInput,
        )
    });
}

fn detect_utf8(c: &mut Criterion) {
    c.bench_function("detect/utf8", |b| {
        b.iter_batched_ref(
            || {
                let mut rng = rand::rng();
                let mut data = Vec::with_capacity(1024);
                while data.len() < 1024 {
                    let mut buf = [0u8; 4];
                    let len = rng.random::<char>().encode_utf8(&mut buf).len();
                    data.extend_from_slice(&buf[..len]);
                }
                data
            },
            |data| detect(black_box(data.as_slice()), data.len()),
            BatchSize::SmallInput,
        )
    });
}

fn score_vector_junk(c: &mut Criterion) {
    c.bench_function("scores/random", |b| {
        b.iter_batched_ref(
            || {
                let mut rng = rand::rng();
                (0..1024).map(|_| rng.random::<u8>()).collect::<Vec<u8>>()
            },
            |data| scores(black_box(data.as_slice())),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(detection, detect_ascii, detect_gb2312, detect_utf8, score_vector_junk);
criterion_main!(detection);
