//! Benchmarks for presentation-stack churn.
//!
//! Run with: cargo bench -p lkit-presenter --bench presenter_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lkit_core::{EntryId, EntryMetadata};
use lkit_presenter::StackPresenter;
use std::hint::black_box;

fn bench_present_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/present_dismiss");

    for depth in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("fill_drain", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut presenter: StackPresenter<u64> = StackPresenter::new();
                for i in 0..depth {
                    presenter.present(
                        EntryId::from_raw(i as u64),
                        EntryMetadata::default(),
                        i as u64,
                    );
                }
                while !presenter.is_empty() {
                    presenter.pop_last();
                }
                black_box(presenter.len())
            })
        });
    }

    group.finish();
}

fn bench_middle_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/middle_dismiss");

    for depth in [16usize, 64] {
        group.bench_with_input(BenchmarkId::new("reindex", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut presenter: StackPresenter<u64> = StackPresenter::new();
                for i in 0..depth {
                    presenter.present(
                        EntryId::from_raw(i as u64),
                        EntryMetadata::default(),
                        i as u64,
                    );
                }
                // Dismiss from the bottom so every removal reindexes.
                for i in 0..depth {
                    presenter.dismiss(EntryId::from_raw(i as u64));
                }
                black_box(presenter.is_empty())
            })
        });
    }

    group.finish();
}

fn bench_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/notify");

    group.bench_function("eight_subscribers", |b| {
        let mut presenter: StackPresenter<u64> = StackPresenter::new();
        let _guards: Vec<_> = (0..8)
            .map(|_| presenter.subscribe(|stack| {
                black_box(stack.len());
            }))
            .collect();

        let mut next = 0u64;
        b.iter(|| {
            presenter.present(EntryId::from_raw(next), EntryMetadata::default(), next);
            presenter.pop_last();
            next += 1;
        })
    });

    group.finish();
}

criterion_group!(benches, bench_present_dismiss, bench_middle_dismiss, bench_notify);
criterion_main!(benches);
