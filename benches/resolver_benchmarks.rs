//! Resolution benchmarks for cldr-plural

use cldr_plural::{Case, Culture, LocaleTag, PluralCategory, RuleSets};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const LANGS: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "ca", "cs", "cy", "da", "de", "el", "en", "es",
    "et", "eu", "fa", "fi", "fr", "ga", "gl", "gu", "he", "hi", "hr", "hu", "hy", "is", "it",
    "ka", "kk", "km", "kn", "lt", "lv", "mk", "ml", "mn", "mr", "ms", "nb", "ne", "nl", "pa",
    "pl", "pt", "ro", "ru", "si", "sk", "sl", "sq", "sr", "sv", "sw", "ta", "te", "tr", "uk",
];

fn rule_sets() -> RuleSets {
    let cultures = LANGS
        .chunks(3)
        .map(|langs| {
            Culture::builder()
                .langs(langs.iter().copied())
                .cardinal(vec![
                    Case::new(PluralCategory::One, "i = 1 and v = 0"),
                    Case::new(PluralCategory::Other, ""),
                ])
                .build()
                .unwrap()
        })
        .collect();
    RuleSets::with_others(cultures, ["ja", "ko", "zh", "th", "vi"]).unwrap()
}

fn find_benchmark(c: &mut Criterion) {
    let sets = rule_sets();

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(1));

    for requested in ["de", "de-AT", "sr-Latn-RS", "zh-Hant-TW", "xx-Yyyy-ZZ"] {
        let tag = LocaleTag::parse(requested).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(requested), &tag, |b, tag| {
            b.iter(|| black_box(sets.find(black_box(tag))));
        });
    }

    group.finish();
}

fn parse_and_find_benchmark(c: &mut Criterion) {
    let sets = rule_sets();

    c.bench_function("find_str_regional", |b| {
        b.iter(|| black_box(sets.find_str(black_box("pt-BR"))));
    });

    c.bench_function("validate_batch", |b| {
        let batch = ["en-US", "fr-CA", "not!!!atag", "xx-XX", "ja-JP", "ru"];
        b.iter(|| black_box(sets.validate(black_box(batch))));
    });
}

fn construction_benchmark(c: &mut Criterion) {
    c.bench_function("build_rule_sets", |b| {
        b.iter(|| black_box(rule_sets()));
    });
}

criterion_group!(
    benches,
    find_benchmark,
    parse_and_find_benchmark,
    construction_benchmark
);
criterion_main!(benches);
