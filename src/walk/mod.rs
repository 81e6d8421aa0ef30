// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded-depth snapshot walker.
//!
//! Turns a live namespace into a flat list of [`NodeRecord`]s. The walk is sequential and
//! depth-first pre-order; an explicit stack keeps call-stack usage flat regardless of tree depth.

use std::fmt;

use crate::client::{ClientError, TreeClient};
use crate::model::{NodeRecord, NodeStat, PathError, SortedRecords, ZPath};

/// Structural ceiling on descent, applied even when the depth limit is unbounded.
pub const MAX_WALK_LEVEL: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A child node could not be read; it and its subtree are missing.
    FetchNode,
    /// A node was read but its children could not be listed; its subtree is missing.
    ListChildren,
    /// Descent stopped at [`MAX_WALK_LEVEL`].
    LevelCap,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchNode => f.write_str("read node"),
            Self::ListChildren => f.write_str("list children"),
            Self::LevelCap => f.write_str("level cap"),
        }
    }
}

/// A non-fatal problem: the named subtree was skipped, the walk went on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkWarning {
    pub path: ZPath,
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for WalkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed for {}: {}", self.kind, self.path, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("invalid root path: {0}")]
    InvalidRoot(#[from] PathError),
    #[error("failed to read {path}: {source}")]
    Fetch {
        path: ZPath,
        #[source]
        source: ClientError,
    },
}

/// Records collected by one walk, in visit order, plus the warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<NodeRecord>,
    warnings: Vec<WalkWarning>,
}

impl Snapshot {
    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn warnings(&self) -> &[WalkWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts the records by path for rendering and hands back the warnings.
    pub fn into_sorted(self) -> (SortedRecords, Vec<WalkWarning>) {
        (SortedRecords::new(self.records), self.warnings)
    }
}

/// Walks the namespace below `root`.
///
/// `depth_limit` 0 is unbounded; `N > 0` records levels `0..=N` and never lists the children of
/// a level-`N` node. `root` is validated before the client is touched. Without a client the walk
/// is a no-op and yields an empty snapshot.
///
/// Only a failure to read `root` itself is fatal. Failures below it become warnings and the
/// affected subtree is left out.
pub fn walk<C: TreeClient + ?Sized>(
    client: Option<&mut C>,
    root: &str,
    depth_limit: u32,
) -> Result<Snapshot, WalkError> {
    let root = ZPath::parse(root)?;
    let Some(client) = client else {
        tracing::debug!(root = %root, "no client, nothing to walk");
        return Ok(Snapshot::default());
    };

    let mut walker =
        Walker { client, depth_limit, snapshot: Snapshot::default(), stack: Vec::new() };
    walker.run(root)?;

    let (records, warnings) = (walker.snapshot.records.len(), walker.snapshot.warnings.len());
    if warnings == 0 {
        tracing::debug!(records, "walk finished");
    } else {
        tracing::warn!(
            records,
            skipped_subtrees = warnings,
            "walk finished with skipped subtrees"
        );
    }
    Ok(walker.snapshot)
}

struct Walker<'c, C: ?Sized> {
    client: &'c mut C,
    depth_limit: u32,
    snapshot: Snapshot,
    stack: Vec<(ZPath, u32)>,
}

impl<C: TreeClient + ?Sized> Walker<'_, C> {
    fn run(&mut self, root: ZPath) -> Result<(), WalkError> {
        let (payload, stat) = self
            .client
            .get(&root)
            .map_err(|source| WalkError::Fetch { path: root.clone(), source })?;
        self.visit(root, 0, payload, stat);

        while let Some((path, level)) = self.stack.pop() {
            match self.client.get(&path) {
                Ok((payload, stat)) => self.visit(path, level, payload, stat),
                Err(err) => self.warn(path, WarningKind::FetchNode, err.to_string()),
            }
        }
        Ok(())
    }

    fn visit(&mut self, path: ZPath, level: u32, payload: Vec<u8>, stat: NodeStat) {
        tracing::trace!(path = %path, level, children = stat.num_children, "visit");
        let descend = self.should_descend(&path, level, &stat);
        if descend {
            self.expand(&path, level);
        }
        self.snapshot.records.push(NodeRecord::new(path, level, payload, stat));
    }

    fn should_descend(&mut self, path: &ZPath, level: u32, stat: &NodeStat) -> bool {
        if stat.num_children == 0 {
            return false;
        }
        if self.depth_limit != 0 && level >= self.depth_limit {
            return false;
        }
        if level >= MAX_WALK_LEVEL {
            self.warn(
                path.clone(),
                WarningKind::LevelCap,
                format!("not descending below level {MAX_WALK_LEVEL}"),
            );
            return false;
        }
        true
    }

    fn expand(&mut self, path: &ZPath, level: u32) {
        match self.client.list_children(path) {
            Ok((names, _)) => {
                // Reversed so the stack pops children in the order the server listed them.
                self.stack.extend(names.iter().rev().map(|name| (path.join(name), level + 1)));
            }
            Err(err) => self.warn(path.clone(), WarningKind::ListChildren, err.to_string()),
        }
    }

    fn warn(&mut self, path: ZPath, kind: WarningKind, message: String) {
        tracing::warn!(path = %path, %kind, error = %message, "skipping subtree");
        self.snapshot.warnings.push(WalkWarning { path, kind, message });
    }
}
