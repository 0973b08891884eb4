use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{build_document, markdown_to_html, prettify};
use pulldown_cmark::{Parser, html::push_html};
mod common;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);

    group.bench_function("build_document", |b| {
        b.iter(|| {
            let doc = build_document(std::hint::black_box(&content));
            std::hint::black_box(doc)
        });
    });

    group.bench_function("markdown_to_html", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content));
            std::hint::black_box(html)
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let mut html = String::new();
            push_html(&mut html, Parser::new(std::hint::black_box(&content)));
            std::hint::black_box(html)
        });
    });

    group.finish();
}

fn bench_prettify(c: &mut Criterion) {
    let mut group = c.benchmark_group("prettify");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let html = markdown_to_html(&content).unwrap();
    group.bench_function("prettify", |b| {
        b.iter(|| std::hint::black_box(prettify(std::hint::black_box(&html))));
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_prettify);
criterion_main!(benches);
