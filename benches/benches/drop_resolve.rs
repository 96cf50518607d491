// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for pointer-to-drop-location resolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_outline::{FlattenMode, Item, Outline};
use understory_outline_drop::{AcceptAll, DropConfig, DropResolver, Hover, UniformRows};

const ROW_HEIGHT: f64 = 20.0;

/// A chain of `depth` nested items repeated `count` times under the root.
fn build(count: u32, depth: u32) -> Outline<u32, ()> {
    let mut next = 1;
    let mut root = Item::new(0, ());
    for _ in 0..count {
        let mut chain = Item::new(next + depth - 1, ());
        for level in (0..depth - 1).rev() {
            chain = Item::new(next + level, ()).with_child(chain);
        }
        next += depth;
        root = root.with_child(chain);
    }
    Outline::new(root)
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("drop/sweep");
    for depth in [1_u32, 4, 8] {
        let outline = build(256, depth);
        let rows = outline.flatten(FlattenMode::All);
        let geometry = UniformRows::new(&rows, ROW_HEIGHT);
        let dragged = [1_u32];
        let resolver = DropResolver::new(&rows, &geometry, &AcceptAll, DropConfig::default())
            .with_dragged(&dragged);

        // One pointer sample per quarter row, sweeping left to right.
        let samples: Vec<(Hover, Point)> = (0..rows.visible_len() * 4)
            .map(|i| {
                let y = i as f64 * ROW_HEIGHT / 4.0 + 1.0;
                let x = (i % 160) as f64;
                (Hover::Row(i / 4), Point::new(x, y))
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &samples, |b, samples| {
            b.iter(|| {
                for &(hover, pointer) in samples {
                    black_box(resolver.resolve(hover, pointer));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
