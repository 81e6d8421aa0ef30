// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::node::NodeRecord;

/// Node records in ascending byte order of their paths.
///
/// This is the only shape the renderers accept, so listing order and sibling lookups always
/// agree on one global order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedRecords {
    records: Vec<NodeRecord>,
}

impl SortedRecords {
    pub fn new(mut records: Vec<NodeRecord>) -> Self {
        records.sort_unstable_by(|a, b| a.path().as_str().cmp(b.path().as_str()));
        Self { records }
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&NodeRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeRecord> {
        self.records.iter()
    }

    /// Index of the record with exactly this path.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.records.binary_search_by(|record| record.path().as_str().cmp(path)).ok()
    }

    pub fn into_records(self) -> Vec<NodeRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a SortedRecords {
    type Item = &'a NodeRecord;
    type IntoIter = std::slice::Iter<'a, NodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SortedRecords;
    use crate::model::{NodeRecord, NodeStat, ZPath};

    fn record(path: &str, level: u32) -> NodeRecord {
        NodeRecord::new(ZPath::parse(path).expect("path"), level, Vec::new(), NodeStat::default())
    }

    #[test]
    fn sorts_by_byte_order_and_finds_positions() {
        let sorted = SortedRecords::new(vec![
            record("/a/d", 1),
            record("/a", 0),
            record("/a/B", 1),
            record("/a/b/x", 2),
            record("/a/b", 1),
            record("/a/c", 1),
        ]);

        let paths = sorted.iter().map(|r| r.path().as_str()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/a", "/a/B", "/a/b", "/a/b/x", "/a/c", "/a/d"]);
        assert_eq!(sorted.position("/a/b/x"), Some(3));
        assert_eq!(sorted.position("/a/e"), None);
    }

    #[test]
    fn dash_sorts_before_separator() {
        // '-' (0x2d) sorts before '/' (0x2f), so `/a-b` lands between `/a` and `/a/x`.
        let sorted = SortedRecords::new(vec![record("/a/x", 1), record("/a-b", 0), record("/a", 0)]);
        let paths = sorted.iter().map(|r| r.path().as_str()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/a", "/a-b", "/a/x"]);
    }
}
