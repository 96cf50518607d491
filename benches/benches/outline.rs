// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_outline` flattening and moves.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_outline::{FlattenMode, Item, Outline, Placement};

/// A complete tree with `fanout` children per item, `depth` levels below the root.
fn build(fanout: u32, depth: u32) -> Outline<u32, ()> {
    fn grow(next: &mut u32, fanout: u32, depth: u32) -> Item<u32, ()> {
        let key = *next;
        *next += 1;
        let mut item = Item::new(key, ());
        if depth > 0 {
            for _ in 0..fanout {
                item = item.with_child(grow(next, fanout, depth - 1));
            }
        }
        item
    }
    let mut next = 0;
    Outline::new(grow(&mut next, fanout, depth))
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/flatten");
    for (fanout, depth) in [(8_u32, 3_u32), (10, 4), (4, 8)] {
        let mut outline = build(fanout, depth);
        let id = format!("{fanout}x{depth}");

        group.bench_with_input(BenchmarkId::new("all", &id), &outline, |b, outline| {
            b.iter(|| black_box(outline.flatten(FlattenMode::All)));
        });

        // Collapse every first child so a share of the rows is hidden.
        let firsts: Vec<u32> = outline
            .root()
            .children()
            .iter()
            .filter_map(|child| child.children().first().map(|c| *c.key()))
            .collect();
        for key in &firsts {
            outline.set_collapsed(key, true);
        }
        group.bench_with_input(BenchmarkId::new("visible", &id), &outline, |b, outline| {
            b.iter(|| black_box(outline.flatten(FlattenMode::Visible)));
        });
    }
    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/move_rows");
    let outline = build(10, 4);
    let rows = outline.flatten(FlattenMode::All);
    let last_top = *outline
        .root()
        .children()
        .last()
        .map(Item::key)
        .unwrap_or(&0);

    // Every tenth row, moved to the end of the last top-level item.
    let sources: Vec<_> = rows
        .iter()
        .step_by(10)
        .filter(|row| row.key != last_top && !rows.is_descendant_of(&last_top, &row.key))
        .cloned()
        .collect();
    group.bench_function("scattered", |b| {
        b.iter_batched(
            || outline.clone(),
            |mut outline| {
                let moved = outline.move_rows(&sources, &Placement::append(last_top));
                black_box(moved)
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_move);
criterion_main!(benches);
