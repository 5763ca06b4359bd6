#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use skvpack::prelude::*;

skv_record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        seq: u64,
        key: String,
        flags: Option<u32>,
        body: Binary,
        ticks: Duration,
    }
}

const N_ROWS: usize = 2000;

fn big_batch() -> Vec<Sample> {
    (0..N_ROWS as u64)
        .map(|i| Sample {
            seq: i,
            key: format!("row/{:08}", i),
            flags: if i % 3 == 0 { None } else { Some(i as u32) },
            body: Binary::from(i.to_be_bytes().to_vec()),
            ticks: Duration::from_nanos(i as i64 * 1_000),
        })
        .collect()
}

fn bench_enc(c: &mut Criterion) {
    let batch = big_batch();
    let enc_len = encode_full(&batch).unwrap().size();
    c.bench_function(
        &format!("Encoding {} records, output of {} bytes", N_ROWS, enc_len),
        move |b| b.iter(|| encode_full(black_box(&batch)).unwrap()),
    );
}

fn bench_dec(c: &mut Criterion) {
    let enc = encode_full(&big_batch()).unwrap();
    c.bench_function(
        &format!("Decoding {} records, input of {} bytes", N_ROWS, enc.size()),
        move |b| {
            b.iter(|| {
                let batch: Vec<Sample> = decode_full(black_box(&enc)).unwrap();
                batch
            })
        },
    );
}

fn bench_dec_blob(c: &mut Criterion) {
    let blob = Binary::from(vec![0x5au8; 1 << 20]);
    let enc = encode_full(&blob).unwrap();
    c.bench_function(
        "Decoding a 1 MiB binary (zero-copy share)",
        move |b| {
            b.iter(|| {
                let out: Binary = decode_full(black_box(&enc)).unwrap();
                out
            })
        },
    );
}

fn bench_dec_blob_copy(c: &mut Criterion) {
    let blob = Binary::from(vec![0x5au8; 1 << 20]);
    let enc = encode_full(&blob).unwrap();
    c.bench_function("Decoding a 1 MiB binary, then deep copy", move |b| {
        b.iter(|| {
            let out: Binary = decode_full(black_box(&enc)).unwrap();
            out.copy()
        })
    });
}

criterion_group!(
    benches,
    bench_enc,
    bench_dec,
    bench_dec_blob,
    bench_dec_blob_copy
);
criterion_main!(benches);
