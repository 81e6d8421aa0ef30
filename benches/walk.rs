// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zktree::model::SortedRecords;
use zktree::walk::walk;

mod fixtures;
mod profiler;

// Group names (`walk.unbounded`, `walk.depth2`, `walk.sort`) and case IDs are stable so results
// stay comparable across refactors.
fn benches_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk.unbounded");
    for case in fixtures::Case::ALL {
        let mut tree = fixtures::tree(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let snapshot =
                    walk(Some(&mut tree), black_box(fixtures::ROOT), 0).expect("walk");
                black_box(snapshot.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("walk.depth2");
    for case in fixtures::Case::ALL {
        let mut tree = fixtures::tree(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let snapshot =
                    walk(Some(&mut tree), black_box(fixtures::ROOT), 2).expect("walk");
                black_box(snapshot.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("walk.sort");
    for case in fixtures::Case::ALL {
        let mut tree = fixtures::tree(case);
        let snapshot = walk(Some(&mut tree), fixtures::ROOT, 0).expect("walk");
        let mut records = snapshot.records().to_vec();
        records.reverse();
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(SortedRecords::new(black_box(records.clone())).len()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_walk
}
criterion_main!(benches);
