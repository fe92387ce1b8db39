// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradcafe_scrape::normalize::{normalize, parse_extra_tags, standardize_date};
use gradcafe_scrape::specs::results::parse_doc;

const PAGE: &str = include_str!("../tests/fixtures/results_page.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("parse_doc", |b| {
        b.iter(|| {
            let rows = parse_doc(black_box(PAGE)).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("parse_and_normalize", |b| {
        b.iter(|| {
            let entries: Vec<_> = parse_doc(black_box(PAGE))
                .unwrap()
                .into_iter()
                .map(normalize)
                .collect();
            black_box(entries.len())
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let tags = ["Fall 2025", "International", "GPA 3.90", "GRE 330", "GRE V 162", "GRE AW 4.50"];

    c.bench_function("parse_extra_tags", |b| {
        b.iter(|| black_box(parse_extra_tags(black_box(&tags))))
    });

    c.bench_function("standardize_date", |b| {
        b.iter(|| {
            black_box(standardize_date(black_box("28 December"), Some(2024)));
            black_box(standardize_date(black_box("December 28, 2024"), None))
        })
    });
}

criterion_group!(benches, bench_extract, bench_normalize);
criterion_main!(benches);
