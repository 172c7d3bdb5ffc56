use criterion::{Criterion, criterion_group, criterion_main};
use nbe_engine::{CommentFamily, parse_source};
mod common;

fn bench_parse_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let go = common::generate_go_source(500);
    group.bench_function("brace_family", |b| {
        b.iter(|| {
            let blocks = parse_source(CommentFamily::Brace, std::hint::black_box(&go));
            std::hint::black_box(blocks)
        });
    });

    let shell = common::generate_shell_source(500);
    group.bench_function("hash_family", |b| {
        b.iter(|| {
            let blocks = parse_source(CommentFamily::Hash, std::hint::black_box(&shell));
            std::hint::black_box(blocks)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_source);
criterion_main!(benches);
