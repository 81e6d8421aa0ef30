// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SortedRecords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiblingInfo {
    /// Some other record shares this record's parent.
    pub has_sibling: bool,
    /// No sibling sorts after this record (vacuously true without siblings).
    pub is_last_sibling: bool,
}

/// Sibling relations of `records[index]`, derived from paths alone.
///
/// Siblings are not necessarily adjacent: the deeper subtree of an earlier sibling sorts between
/// them. So this scans the whole collection rather than peeking at neighbours. An out-of-range
/// index has no relations at all.
pub fn sibling_info(records: &SortedRecords, index: usize) -> SiblingInfo {
    let Some(target) = records.get(index) else {
        return SiblingInfo::default();
    };
    let mut info = SiblingInfo { has_sibling: false, is_last_sibling: true };
    let Some(parent) = target.path().parent() else {
        return info;
    };

    for (other_index, other) in records.iter().enumerate() {
        if other_index == index || other.path() == target.path() {
            continue;
        }
        if other.path().parent() != Some(parent) {
            continue;
        }
        info.has_sibling = true;
        if other_index > index {
            info.is_last_sibling = false;
            break;
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::{sibling_info, SiblingInfo};
    use crate::model::{NodeRecord, NodeStat, SortedRecords, ZPath};

    fn sorted(paths: &[&str]) -> SortedRecords {
        SortedRecords::new(
            paths
                .iter()
                .map(|path| {
                    let path = ZPath::parse(path).expect("path");
                    let level = path.depth().saturating_sub(1) as u32;
                    NodeRecord::new(path, level, Vec::new(), NodeStat::default())
                })
                .collect(),
        )
    }

    fn info(records: &SortedRecords, path: &str) -> SiblingInfo {
        sibling_info(records, records.position(path).expect("position"))
    }

    #[test]
    fn worked_example_with_interleaved_subtree() {
        let records = sorted(&["/a/d", "/a/c", "/a/b/x", "/a/b", "/a"]);

        assert_eq!(info(&records, "/a"), SiblingInfo { has_sibling: false, is_last_sibling: true });
        assert_eq!(info(&records, "/a/b"), SiblingInfo { has_sibling: true, is_last_sibling: false });
        assert_eq!(
            info(&records, "/a/b/x"),
            SiblingInfo { has_sibling: false, is_last_sibling: true }
        );
        assert_eq!(info(&records, "/a/c"), SiblingInfo { has_sibling: true, is_last_sibling: false });
        assert_eq!(info(&records, "/a/d"), SiblingInfo { has_sibling: true, is_last_sibling: true });
    }

    #[test]
    fn siblings_separated_by_deep_subtrees_are_found() {
        let records = sorted(&["/r", "/r/a", "/r/a/1", "/r/a/1/deep", "/r/a/2", "/r/z"]);

        assert!(info(&records, "/r/a").has_sibling);
        assert!(!info(&records, "/r/a").is_last_sibling);
        assert!(info(&records, "/r/z").is_last_sibling);
        assert!(info(&records, "/r/a/1").has_sibling);
        assert!(!info(&records, "/r/a/1").is_last_sibling);
        assert!(info(&records, "/r/a/2").is_last_sibling);
    }

    #[test]
    fn root_has_no_siblings() {
        let records = sorted(&["/", "/a", "/b"]);
        assert_eq!(info(&records, "/"), SiblingInfo { has_sibling: false, is_last_sibling: true });
        assert!(info(&records, "/a").has_sibling);
        assert!(info(&records, "/b").is_last_sibling);
    }

    #[test]
    fn out_of_range_index_has_no_relations() {
        let records = sorted(&["/a"]);
        assert_eq!(sibling_info(&records, 7), SiblingInfo::default());
    }
}
