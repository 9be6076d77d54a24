use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stringvault_core::core_analysis::{analyze, content_hash};

/// Deterministic filler text of roughly the requested byte length.
fn sample_text(len: usize) -> String {
    let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    let mut text = String::with_capacity(len + 8);
    let mut i = 0;
    while text.len() < len {
        text.push_str(words[i % words.len()]);
        text.push(' ');
        i += 1;
    }
    text.truncate(len);
    text
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_analysis");

    group.bench_function("analyze_short", |b| {
        b.iter(|| black_box(analyze(black_box("A man a plan a canal Panama"))));
    });

    for size in [10, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let text = sample_text(*size);

        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| black_box(analyze(text)));
        });
    }

    // Worst case for the palindrome comparison: equality holds until the
    // final character pair
    let half = "ab".repeat(5_000);
    let long_palindrome: String = half.chars().chain(half.chars().rev()).collect();
    group.bench_function("analyze_long_palindrome", |b| {
        b.iter(|| black_box(analyze(&long_palindrome)));
    });

    group.finish();
}

fn bench_content_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_hash");

    for size in [10, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let text = sample_text(*size);

        group.bench_with_input(BenchmarkId::new("hash", size), &text, |b, text| {
            b.iter(|| black_box(content_hash(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_content_hash);
criterion_main!(benches);
