use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ucd_info::*;

const ASCII: &str = "The quick brown fox jumps over the lazy dog, 0123456789!";
const MIXED: &str = "Ünïcödé: Ελληνικά, кириллица, العربية, 日本語のテキスト, 한국어 😀";

fn category_benchmark(c: &mut Criterion) {
    c.bench_function("lookup_category: ascii", |b| b.iter(|| {
        ASCII.chars().map(|ch| lookup_category(black_box(ch as u32)) as u32).sum::<u32>()
    }));

    c.bench_function("lookup_category: mixed", |b| b.iter(|| {
        MIXED.chars().map(|ch| lookup_category(black_box(ch as u32)) as u32).sum::<u32>()
    }));

    c.bench_function("lookup_script: mixed", |b| b.iter(|| {
        MIXED.chars().map(|ch| lookup_script(black_box(ch as u32)) as u32).sum::<u32>()
    }));

    c.bench_function("classify: mixed", |b| b.iter(|| {
        MIXED.chars().map(|ch| classify(black_box(ch as u32)).properties.bits()).fold(0, |acc, bits| acc | bits)
    }));
}

fn predicate_benchmark(c: &mut Criterion) {
    c.bench_function("is_alnum: ascii", |b| b.iter(|| {
        ASCII.chars().filter(|ch| is_alnum(black_box(*ch as u32))).count()
    }));

    c.bench_function("is_punct: mixed", |b| b.iter(|| {
        MIXED.chars().filter(|ch| is_punct(black_box(*ch as u32))).count()
    }));

    c.bench_function("is_space: mixed", |b| b.iter(|| {
        MIXED.chars().filter(|ch| is_space(black_box(*ch as u32))).count()
    }));
}

fn case_benchmark(c: &mut Criterion) {
    c.bench_function("to_upper: ascii", |b| b.iter(|| {
        ASCII.chars().map(|ch| to_upper(black_box(ch as u32))).sum::<u32>()
    }));

    c.bench_function("to_lower: mixed", |b| b.iter(|| {
        MIXED.chars().map(|ch| to_lower(black_box(ch as u32))).sum::<u32>()
    }));
}

criterion_group!(lookup, category_benchmark, predicate_benchmark, case_benchmark);
criterion_main!(lookup);
