// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ready-made in-memory namespaces for `--demo`, tests and benchmarks.

use super::MemoryTree;

/// A small namespace shaped like a typical ensemble: service config, ephemeral members and the
/// built-in `/zookeeper` subtree.
pub fn demo_tree() -> MemoryTree {
    let mut tree = MemoryTree::new();
    tree.insert("/zookeeper/config", "server.1=127.0.0.1:2888:3888:participant")
        .insert("/zookeeper/quota", "")
        .insert("/services/payments/config", r#"{"retries":3,"timeout_ms":250}"#)
        .insert("/services/payments/members/member-0000000001", "10.0.0.11:8080")
        .insert("/services/payments/members/member-0000000002", "10.0.0.12:8080")
        .insert("/services/ledger/config", r#"{"shards":16}"#)
        .insert("/services/ledger/leader", "10.0.0.21:9090")
        .insert("/locks/ledger-compaction", "")
        .set_ephemeral_owner("/services/payments/members/member-0000000001", 0x1000_0000_0000_0a01)
        .set_ephemeral_owner("/services/payments/members/member-0000000002", 0x1000_0000_0000_0a02)
        .set_ephemeral_owner("/services/ledger/leader", 0x1000_0000_0000_0b07);
    tree
}

/// `/a` with children `b`, `c`, `d` (listed out of order) where `b` has a child `x`.
pub fn sibling_example() -> MemoryTree {
    let mut tree = MemoryTree::new();
    tree.insert("/a/d", "").insert("/a/b/x", "").insert("/a/c", "");
    tree
}

/// A uniform tree below `/bench`: every node has `fanout` children, `depth` levels deep.
pub fn uniform_tree(fanout: usize, depth: usize) -> MemoryTree {
    let mut tree = MemoryTree::new();
    let mut frontier = vec!["/bench".to_owned()];
    tree.insert("/bench", "");

    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for parent in &frontier {
            for idx in 0..fanout {
                let child = format!("{parent}/node-{idx:04}");
                tree.insert(&child, format!("payload for {child}"));
                next.push(child);
            }
        }
        frontier = next;
    }

    tree
}
