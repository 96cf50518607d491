// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for tree-aware selection clicks.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_outline::{FlattenMode, Item, Outline};
use understory_selection::{Modifiers, Selection};

/// `groups` top-level items with `leaves` children each.
fn build(groups: u32, leaves: u32) -> Outline<u32, ()> {
    let mut next = 1;
    let mut root = Item::new(0, ());
    for _ in 0..groups {
        let mut group = Item::new(next, ());
        next += 1;
        for _ in 0..leaves {
            group = group.with_child(Item::new(next, ()));
            next += 1;
        }
        root = root.with_child(group);
    }
    Outline::new(root)
}

fn bench_range_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/range_click");

    // A range across every row; ancestor exclusion drops every group key.
    for groups in [16_u32, 128, 1_024] {
        let outline = build(groups, 8);
        let rows = outline.flatten(FlattenMode::All);
        let first = rows.visible(0).map(|row| row.key).unwrap_or(0);
        let last = rows
            .visible(rows.visible_len() - 1)
            .map(|row| row.key)
            .unwrap_or(0);
        group.throughput(Throughput::Elements(rows.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(groups), &rows, |b, rows| {
            b.iter_batched(
                || {
                    let mut sel = Selection::new();
                    sel.click(first, Modifiers::empty(), rows);
                    sel
                },
                |mut sel| {
                    sel.click(last, Modifiers::RANGE, rows);
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_toggle_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/toggle_click");
    for groups in [16_u32, 128, 1_024] {
        let outline = build(groups, 8);
        let rows = outline.flatten(FlattenMode::All);
        // Every leaf selected; toggling one more re-runs the exclusion pass.
        let leaves: Vec<u32> = rows
            .iter()
            .filter(|row| !row.has_children)
            .map(|row| row.key)
            .collect();
        let probe = leaves.last().copied().unwrap_or(0);

        group.bench_with_input(BenchmarkId::from_parameter(groups), &rows, |b, rows| {
            b.iter_batched(
                || {
                    let mut sel = Selection::new();
                    sel.replace_with(leaves.iter().copied());
                    sel
                },
                |mut sel| {
                    sel.click(probe, Modifiers::TOGGLE, rows);
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_range_click, bench_toggle_click);
criterion_main!(benches);
