//! Assembly hot-path benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use tx_builder::{BuilderRecord, TransactionBuilder};

fn build_with_records(program_id: Pubkey, count: u16, tagged_at: Option<u16>) -> TransactionBuilder {
    let mut builder = TransactionBuilder::default();
    for i in 0..count {
        let ix = Instruction::new_with_bytes(program_id, &i.to_le_bytes(), vec![]);
        let record = match tagged_at {
            Some(tag_index) if tag_index == i => BuilderRecord::new(ix).with_key("mid"),
            _ => BuilderRecord::new(ix),
        };
        builder.append(record);
    }
    builder
}

fn bench_append(c: &mut Criterion) {
    let program_id = Pubkey::new_unique();
    c.bench_function("append_512", |b| {
        b.iter(|| {
            let builder = build_with_records(program_id, 512, None);
            black_box(builder.len())
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    let program_id = Pubkey::new_unique();
    let donor = build_with_records(program_id, 256, None);
    let base = build_with_records(program_id, 256, None);

    c.bench_function("merge_256_into_256", |b| {
        b.iter(|| {
            let mut recipient = base.clone();
            recipient.merge(&donor);
            black_box(recipient.len())
        })
    });
}

fn bench_split(c: &mut Criterion) {
    let program_id = Pubkey::new_unique();
    let builder = build_with_records(program_id, 512, Some(256));

    c.bench_function("split_before_key_512", |b| {
        b.iter(|| {
            let (first, second) = builder.split_before_key("mid");
            black_box((first.len(), second.len()))
        })
    });
}

fn bench_to_transaction(c: &mut Criterion) {
    let program_id = Pubkey::new_unique();
    let builder = build_with_records(program_id, 64, None);

    c.bench_function("to_transaction_64", |b| {
        b.iter(|| black_box(builder.to_transaction()))
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_merge,
    bench_split,
    bench_to_transaction
);
criterion_main!(benches);
