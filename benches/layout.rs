// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use kindred::layout::{layout_neighborhood, LayoutConfig, LayoutResult, MAX_DEPTH};
use kindred::query::Resolver;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names: `layout.neighborhood`, `query.partners`
// - Case IDs after the `/` must stay stable so results remain comparable over time.
fn checksum_layout(result: &LayoutResult) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(result.nodes.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(result.edges.len() as u64);
    for node in &result.nodes {
        acc = acc.wrapping_mul(131).wrapping_add(node.x.to_bits());
    }
    acc
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn criterion_config() -> Criterion {
    let sample_size = env_u64("BENCH_SAMPLE_SIZE", 60).clamp(10, 200) as usize;
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}

fn benches_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout.neighborhood");

    for depth in [4u8, MAX_DEPTH] {
        let tree = fixtures::pedigree(u32::from(MAX_DEPTH));
        let nodes = layout_neighborhood(&tree, &config, None, depth)
            .expect("layout")
            .nodes
            .len();
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_function(format!("pedigree_depth_{depth}"), |b| {
            b.iter(|| {
                let result = layout_neighborhood(black_box(&tree), &config, None, black_box(depth))
                    .expect("layout");
                black_box(checksum_layout(&result))
            })
        });
    }

    let wide = fixtures::wide_family(12, 6, 5);
    group.bench_function("wide_family", |b| {
        b.iter(|| {
            let result =
                layout_neighborhood(black_box(&wide), &config, None, 4).expect("layout");
            black_box(checksum_layout(&result))
        })
    });
    group.finish();

    let mut group = c.benchmark_group("query.partners");
    let focus = fixtures::pid("f");
    group.bench_function("wide_family", |b| {
        let resolver = Resolver::new(&wide);
        b.iter(|| black_box(resolver.partners_and_children(black_box(&focus)).expect("groups")))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = benches_layout
}
criterion_main!(benches);
