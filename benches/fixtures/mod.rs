// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark namespaces.

use zktree::client::fixtures::uniform_tree;
use zktree::client::MemoryTree;
use zktree::model::SortedRecords;
use zktree::walk::walk;

pub const ROOT: &str = "/bench";

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 8 x 8 x 8, shallow and wide.
    Wide,
    /// Fanout 3, six levels, long tree prefixes.
    Deep,
    /// 40 x 40, siblings dominate.
    Flat,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Wide, Case::Deep, Case::Flat];

    pub fn id(self) -> &'static str {
        match self {
            Case::Wide => "wide",
            Case::Deep => "deep",
            Case::Flat => "flat",
        }
    }

    fn shape(self) -> (usize, usize) {
        match self {
            Case::Wide => (8, 3),
            Case::Deep => (3, 6),
            Case::Flat => (40, 2),
        }
    }
}

pub fn tree(case: Case) -> MemoryTree {
    let (fanout, depth) = case.shape();
    uniform_tree(fanout, depth)
}

pub fn sorted(case: Case) -> SortedRecords {
    let mut tree = tree(case);
    let (records, warnings) = walk(Some(&mut tree), ROOT, 0).expect("walk").into_sorted();
    assert!(warnings.is_empty(), "fixture walk raised warnings");
    records
}
