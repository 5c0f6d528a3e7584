//! 卡片列表性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linkdeck::deck::{CardId, CardListController, DEFAULT_SCHEME, LinkOpener, normalize_url_with_scheme};
use linkdeck::interfaces::tui::view::project_cards;
use std::hint::black_box;
use url::Url;

struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&self, _url: &Url) -> std::io::Result<()> {
        Ok(())
    }
}

fn filled_deck(size: usize) -> (CardListController, Vec<CardId>) {
    let mut deck = CardListController::with_opener(Box::new(NoopOpener));
    let ids = (0..size)
        .filter_map(|i| deck.add(&format!("site{}.example.com/page", i)).ok())
        .map(|card| card.id())
        .collect();
    (deck, ids)
}

// ============== URL 规范化 ==============

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize/bare_domain", |b| {
        b.iter(|| normalize_url_with_scheme(black_box("example.com/docs?q=1"), DEFAULT_SCHEME))
    });

    c.bench_function("normalize/with_scheme", |b| {
        b.iter(|| normalize_url_with_scheme(black_box("https://example.com/docs?q=1"), DEFAULT_SCHEME))
    });

    c.bench_function("normalize/invalid", |b| {
        b.iter(|| normalize_url_with_scheme(black_box("http://"), DEFAULT_SCHEME))
    });
}

// ============== 独占选择 ==============

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for size in [10, 100, 1000] {
        let (mut deck, ids) = filled_deck(size);
        let mut i = 0usize;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("rotate", size), &size, |b, _| {
            b.iter(|| {
                let id = ids[i % ids.len()];
                i = i.wrapping_add(7);
                black_box(deck.select(id))
            })
        });
    }

    group.finish();
}

// ============== 添加与删除 ==============

fn bench_add_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_delete");

    for size in [10, 1000] {
        let (mut deck, _) = filled_deck(size);

        group.bench_with_input(BenchmarkId::new("churn", size), &size, |b, _| {
            b.iter(|| {
                if let Ok(card) = deck.add(black_box("churn.example.com")) {
                    black_box(deck.delete(card.id()));
                }
            })
        });
    }

    group.finish();
}

// ============== 视图投影 ==============

fn bench_projection(c: &mut Criterion) {
    let (deck, _) = filled_deck(100);

    c.bench_function("projection/100_cards", |b| {
        b.iter(|| project_cards(black_box(deck.cards()), Some(50), 60))
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_select,
    bench_add_delete,
    bench_projection
);
criterion_main!(benches);
