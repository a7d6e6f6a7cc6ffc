use considering_grammar::Statement;
use considering_pipeline::{StoryCollection, Summary};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const LINES: [&str; 4] = [
    "As a user, I want to be able to create user stories so that I record my needs.",
    "As a admin, I can ban users so that I keep order",
    "I want to be able to create user stories, I hope.",
    "As a, I want to rest so that I sleep",
];

fn batch(size: usize) -> Vec<Statement> {
    LINES
        .iter()
        .cycle()
        .take(size)
        .map(|line| Statement::new(*line))
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");
    for size in [16, 256] {
        let statements = batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("of_{size}"), |b| {
            b.iter(|| Summary::of(black_box(&statements)))
        });
        group.bench_function(format!("collect_{size}"), |b| {
            b.iter(|| StoryCollection::from_statements(black_box(statements.clone())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
