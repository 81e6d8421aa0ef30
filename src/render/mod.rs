// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of walk results.
//!
//! Renderers only ever see [`SortedRecords`]; the tree view is reconstructed from that flat,
//! path-sorted list via [`sibling_info`] instead of a retained tree.

use std::io::{self, Write};

use rayon::prelude::*;

use crate::model::SortedRecords;

mod json;
mod line;
mod sibling;

pub use json::write_json;
pub use line::render_line;
pub use sibling::{sibling_info, SiblingInfo};

pub const TREE_MID: &str = "├── ";
pub const TREE_LAST: &str = "└── ";
pub const TREE_PIPE: &str = "│   ";
pub const TREE_BLANK: &str = "    ";

pub const EMPTY_MESSAGE: &str = "no nodes found";

/// Output toggles. Fields compose independently; `all_metadata` switches on every metadata
/// column on top of whatever is individually selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub txids: bool,
    pub versions: bool,
    pub times: bool,
    pub owner: bool,
    pub length: bool,
    pub children: bool,
    pub all_metadata: bool,
    pub tree: bool,
    pub full_path: bool,
    pub data: bool,
    pub level: bool,
}

impl RenderConfig {
    pub fn shows_txids(&self) -> bool {
        self.all_metadata || self.txids
    }

    pub fn shows_versions(&self) -> bool {
        self.all_metadata || self.versions
    }

    pub fn shows_times(&self) -> bool {
        self.all_metadata || self.times
    }

    pub fn shows_owner(&self) -> bool {
        self.all_metadata || self.owner
    }

    pub fn shows_length(&self) -> bool {
        self.all_metadata || self.length
    }

    pub fn shows_children(&self) -> bool {
        self.all_metadata || self.children
    }

    pub fn shows_metadata(&self) -> bool {
        self.shows_txids()
            || self.shows_versions()
            || self.shows_times()
            || self.shows_owner()
            || self.shows_length()
            || self.shows_children()
    }
}

/// One line per record, in collection order.
///
/// Lines are independent of each other, so they are rendered in parallel; `collect` keeps the
/// original order.
pub fn render_lines(records: &SortedRecords, config: &RenderConfig) -> Vec<String> {
    (0..records.len()).into_par_iter().map(|index| render_line(records, index, config)).collect()
}

/// Writes the line listing, or [`EMPTY_MESSAGE`] when there is nothing to list.
pub fn write_text(
    out: &mut impl Write,
    records: &SortedRecords,
    config: &RenderConfig,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{EMPTY_MESSAGE}");
    }
    for line in render_lines(records, config) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
