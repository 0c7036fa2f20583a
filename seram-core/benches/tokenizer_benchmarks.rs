//! Performance benchmarks for the tokenizer
//!
//! Run with: cargo bench --bench tokenizer_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seram_core::{
    CharClasses, Lexicon, Resources, SegmentationPolicy, TokenizeOptions, Tokenizer,
    TokenizerConfig,
};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Dia suka lari-lari di pagi hari, sara makan naga... ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

fn resources() -> Resources {
    Resources::new(
        Lexicon::from_words(["dana", "naga", "hari", "pagi"]),
        CharClasses::default(),
    )
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let tokenizer = Tokenizer::new(resources()).unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the affix stages
fn bench_affix_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("affix_options");
    let tokenizer = Tokenizer::new(resources()).unwrap();
    let text = generate_text(10_240);

    for (name, options) in [
        ("none", TokenizeOptions::default()),
        ("suffix", TokenizeOptions::new(true, false)),
        ("prefix", TokenizeOptions::new(false, true)),
        ("both", TokenizeOptions::all()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| tokenizer.tokenize_with(black_box(&text), options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the two segmentation policies
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let text = generate_text(10_240);

    for policy in SegmentationPolicy::all() {
        let config = TokenizerConfig::builder().policy(*policy).build().unwrap();
        let tokenizer = Tokenizer::with_config(config, resources()).unwrap();

        group.bench_with_input(BenchmarkId::new("segment", policy), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_affix_options, bench_policies);
criterion_main!(benches);
