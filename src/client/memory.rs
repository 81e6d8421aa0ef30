// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::path::{base_name_of, parent_of};
use crate::model::{NodeStat, ZPath};

use super::{ClientError, ErrorCode, TreeClient};

#[derive(Debug, Clone, Default)]
struct MemoryNode {
    payload: Vec<u8>,
    stat: NodeStat,
    children: Vec<String>,
}

/// An in-memory namespace.
///
/// Children are listed in insertion order, which lets tests model servers that return names
/// unsorted. Individual paths can be marked to fail `get` or `list_children`.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: BTreeMap<String, MemoryNode>,
    failing_get: BTreeSet<String>,
    failing_list: BTreeSet<String>,
    next_zxid: i64,
    calls: usize,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    /// A namespace holding only the root node `/`.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_owned(), MemoryNode::default());
        Self {
            nodes,
            failing_get: BTreeSet::new(),
            failing_list: BTreeSet::new(),
            next_zxid: 1,
            calls: 0,
        }
    }

    /// Inserts (or overwrites the payload of) `path`, creating missing ancestors with empty
    /// payloads.
    ///
    /// Panics if `path` is not absolute; this is a builder for fixtures.
    pub fn insert(&mut self, path: &str, payload: impl Into<Vec<u8>>) -> &mut Self {
        let path = ZPath::parse(path).unwrap_or_else(|err| panic!("fixture path: {err}"));
        self.ensure(&path);

        let zxid = self.bump_zxid();
        let payload = payload.into();
        if let Some(node) = self.nodes.get_mut(path.as_str()) {
            node.stat.data_length = i32::try_from(payload.len()).unwrap_or(i32::MAX);
            node.stat.mzxid = zxid;
            node.stat.mtime = zxid_time(zxid);
            node.stat.version += 1;
            node.payload = payload;
        }
        self
    }

    /// Marks `owner` as the ephemeral owner session of an existing node.
    pub fn set_ephemeral_owner(&mut self, path: &str, owner: i64) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(path) {
            node.stat.ephemeral_owner = owner;
        }
        self
    }

    /// Makes every `get` of `path` fail with a connection loss.
    pub fn fail_get(&mut self, path: &str) -> &mut Self {
        self.failing_get.insert(path.to_owned());
        self
    }

    /// Makes every `list_children` of `path` fail with a connection loss.
    pub fn fail_list(&mut self, path: &str) -> &mut Self {
        self.failing_list.insert(path.to_owned());
        self
    }

    /// Total number of `get` and `list_children` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn ensure(&mut self, path: &ZPath) {
        if self.nodes.contains_key(path.as_str()) {
            return;
        }

        let mut created = Vec::new();
        let mut cursor = path.as_str().to_owned();
        while !self.nodes.contains_key(&cursor) {
            let Some(parent) = parent_of(&cursor) else { break };
            let parent = parent.to_owned();
            created.push(cursor);
            cursor = parent;
        }

        for child in created.into_iter().rev() {
            let zxid = self.bump_zxid();
            let name = base_name_of(&child).to_owned();
            let parent = parent_of(&child).unwrap_or("/").to_owned();

            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.push(name);
                parent_node.stat.num_children += 1;
                parent_node.stat.cversion += 1;
                parent_node.stat.pzxid = zxid;
            }

            let stat = NodeStat {
                czxid: zxid,
                mzxid: zxid,
                pzxid: zxid,
                ctime: zxid_time(zxid),
                mtime: zxid_time(zxid),
                ..NodeStat::default()
            };
            self.nodes.insert(child, MemoryNode { stat, ..MemoryNode::default() });
        }
    }

    fn bump_zxid(&mut self) -> i64 {
        let zxid = self.next_zxid;
        self.next_zxid += 1;
        zxid
    }

    fn lookup(&self, path: &ZPath) -> Result<&MemoryNode, ClientError> {
        self.nodes
            .get(path.as_str())
            .ok_or_else(|| ClientError::Server { path: path.to_string(), code: ErrorCode::NO_NODE })
    }
}

impl TreeClient for MemoryTree {
    fn get(&mut self, path: &ZPath) -> Result<(Vec<u8>, NodeStat), ClientError> {
        self.calls += 1;
        if self.failing_get.contains(path.as_str()) {
            return Err(ClientError::Server {
                path: path.to_string(),
                code: ErrorCode::CONNECTION_LOSS,
            });
        }
        let node = self.lookup(path)?;
        Ok((node.payload.clone(), node.stat))
    }

    fn list_children(&mut self, path: &ZPath) -> Result<(Vec<String>, NodeStat), ClientError> {
        self.calls += 1;
        if self.failing_list.contains(path.as_str()) {
            return Err(ClientError::Server {
                path: path.to_string(),
                code: ErrorCode::CONNECTION_LOSS,
            });
        }
        let node = self.lookup(path)?;
        Ok((node.children.clone(), node.stat))
    }
}

// Fixture clock: 2026-01-01T00:00:00Z plus one second per zxid.
fn zxid_time(zxid: i64) -> i64 {
    1_767_225_600_000 + zxid * 1_000
}

#[cfg(test)]
mod tests {
    use super::MemoryTree;
    use crate::client::{ClientError, ErrorCode, TreeClient};
    use crate::model::ZPath;

    fn path(raw: &str) -> ZPath {
        ZPath::parse(raw).expect("path")
    }

    #[test]
    fn insert_creates_ancestors_in_order() {
        let mut tree = MemoryTree::new();
        tree.insert("/a/b", "x").insert("/a/c", "").insert("/d", "");

        let (children, stat) = tree.list_children(&path("/")).expect("list root");
        assert_eq!(children, vec!["a".to_owned(), "d".to_owned()]);
        assert_eq!(stat.num_children, 2);

        let (children, _) = tree.list_children(&path("/a")).expect("list /a");
        assert_eq!(children, vec!["b".to_owned(), "c".to_owned()]);

        let (payload, stat) = tree.get(&path("/a/b")).expect("get /a/b");
        assert_eq!(payload, b"x");
        assert_eq!(stat.data_length, 1);
        assert_eq!(stat.num_children, 0);
        assert_eq!(tree.calls(), 3);
    }

    #[test]
    fn missing_and_failing_paths_error() {
        let mut tree = MemoryTree::new();
        tree.insert("/a", "").fail_list("/a").fail_get("/b");

        let err = tree.get(&path("/missing")).unwrap_err();
        assert!(matches!(err, ClientError::Server { code: ErrorCode::NO_NODE, .. }));

        let err = tree.list_children(&path("/a")).unwrap_err();
        assert!(matches!(err, ClientError::Server { code: ErrorCode::CONNECTION_LOSS, .. }));

        let err = tree.get(&path("/b")).unwrap_err();
        assert!(matches!(err, ClientError::Server { code: ErrorCode::CONNECTION_LOSS, .. }));
    }
}
