use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cjk_core::japanese::{Lexicon, Segmenter};
use cjk_core::{LocaleCode, Registry};

static INPUTS: &[(&str, &str)] = &[
    ("short", "電脳"),
    ("medium", "人工知能の機械学習"),
    ("long", "中央演算装置と記憶装置の情報処理技術"),
];

fn bench_segment(c: &mut Criterion) {
    let segmenter = Segmenter::new(Lexicon::embedded().unwrap(), 3000, 10000);
    let mut group = c.benchmark_group("japanese/segment");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| segmenter.segment(text));
        });
    }
    group.finish();
}

fn bench_romanize(c: &mut Criterion) {
    let registry = Registry::global();
    let mut group = c.benchmark_group("romanize");
    for locale in [LocaleCode::Ja, LocaleCode::ZhCn, LocaleCode::ZhTw, LocaleCode::ZhHk] {
        let (_, text) = INPUTS[1];
        group.bench_with_input(BenchmarkId::new(locale.as_str(), text.len()), &text, |b, &text| {
            b.iter(|| registry.romanize(text, locale).unwrap());
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let registry = Registry::global();
    let mut group = c.benchmark_group("read");
    for &(label, text) in INPUTS {
        let normalized = registry.normalize(text, LocaleCode::Ja, LocaleCode::Ko);
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| registry.read(LocaleCode::Ko, text, &normalized, "").unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment, bench_romanize, bench_read);
criterion_main!(benches);
