use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::book::service::BookService;
use service::book::repository::mock::MockBookRepository;
use service::book::domain::{BookPatch, NewBook};

fn bench_update(c: &mut Criterion) {
    let svc = BookService::new(Arc::new(MockBookRepository::default()));
    let rt = tokio::runtime::Runtime::new().unwrap();
    let created = rt
        .block_on(svc.create(NewBook { title: "Bench".into(), description: "Benchmark book".into(), rating: 3 }))
        .unwrap();

    c.bench_function("book_update_merge", |b| {
        b.iter(|| {
            rt.block_on(svc.update(created.id.into(), BookPatch { rating: Some(4), ..Default::default() })).unwrap();
        });
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
