// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Utc};

use crate::model::{NodeRecord, NodeStat, SortedRecords};

use super::sibling::sibling_info;
use super::{RenderConfig, TREE_BLANK, TREE_LAST, TREE_MID, TREE_PIPE};

const COUNTER_WIDTH: usize = 6;
const LENGTH_WIDTH: usize = 8;
const TIME_WIDTH: usize = 24;

/// Renders `records[index]` as one output line.
///
/// Layout: `level:N\t` (optional), `[metadata] ` (when any field is on), tree connectors
/// (optional), the display path, ` [payload]` (optional, non-empty payloads only).
pub fn render_line(records: &SortedRecords, index: usize, config: &RenderConfig) -> String {
    let Some(record) = records.get(index) else {
        return String::new();
    };

    let mut line = String::with_capacity(64 + record.path().as_str().len());

    if config.level {
        line.push_str("level:");
        line.push_str(itoa::Buffer::new().format(record.level()));
        line.push('\t');
    }

    if config.shows_metadata() {
        line.push('[');
        write_metadata(&mut line, record.stat(), config);
        line.push_str("] ");
    }

    if config.tree {
        push_tree_prefix(&mut line, records, index, record);
    }

    if config.full_path {
        line.push_str(record.path().as_str());
    } else {
        line.push_str(record.path().base_name());
    }

    if config.data && !record.payload().is_empty() {
        line.push_str(" [");
        line.push_str(&String::from_utf8_lossy(record.payload()));
        line.push(']');
    }

    line
}

fn push_tree_prefix(line: &mut String, records: &SortedRecords, index: usize, record: &NodeRecord) {
    let level = record.level() as usize;
    if level == 0 {
        return;
    }

    // Depth of the walk root inside the namespace.
    let base = record.path().depth().saturating_sub(level);
    for ancestor_level in 1..level {
        let pending = record
            .path()
            .ancestor(base + ancestor_level)
            .and_then(|ancestor| records.position(ancestor))
            .is_some_and(|ancestor_index| !sibling_info(records, ancestor_index).is_last_sibling);
        line.push_str(if pending { TREE_PIPE } else { TREE_BLANK });
    }

    if sibling_info(records, index).is_last_sibling {
        line.push_str(TREE_LAST);
    } else {
        line.push_str(TREE_MID);
    }
}

/// Enabled metadata fields in canonical order, separated by single spaces.
fn write_metadata(out: &mut String, stat: &NodeStat, config: &RenderConfig) {
    let mut fields = Fields { out, first: true };

    if config.shows_txids() {
        fields.hex("czxid", stat.czxid);
        fields.hex("mzxid", stat.mzxid);
        fields.hex("pzxid", stat.pzxid);
    }
    if config.shows_versions() {
        fields.number("version", i64::from(stat.version), COUNTER_WIDTH);
        fields.number("cversion", i64::from(stat.cversion), COUNTER_WIDTH);
        fields.number("aversion", i64::from(stat.aversion), COUNTER_WIDTH);
    }
    if config.shows_times() {
        fields.time("ctime", stat.ctime);
        fields.time("mtime", stat.mtime);
    }
    if config.shows_owner() {
        fields.hex("owner", stat.ephemeral_owner);
    }
    if config.shows_length() {
        fields.number("length", i64::from(stat.data_length), LENGTH_WIDTH);
    }
    if config.shows_children() {
        fields.number("children", i64::from(stat.num_children), COUNTER_WIDTH);
    }
}

struct Fields<'a> {
    out: &'a mut String,
    first: bool,
}

impl Fields<'_> {
    fn label(&mut self, name: &str) {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
        self.out.push_str(name);
        self.out.push('=');
    }

    fn hex(&mut self, name: &str, value: i64) {
        self.label(name);
        self.out.push_str(&format!("{value:#018x}"));
    }

    fn number(&mut self, name: &str, value: i64, width: usize) {
        self.label(name);
        let mut buf = itoa::Buffer::new();
        pad_left(self.out, buf.format(value), width);
    }

    fn time(&mut self, name: &str, millis: i64) {
        self.label(name);
        match DateTime::<Utc>::from_timestamp_millis(millis) {
            Some(time) => {
                let formatted = time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
                pad_left(self.out, &formatted, TIME_WIDTH);
            }
            None => {
                let mut buf = itoa::Buffer::new();
                pad_left(self.out, buf.format(millis), TIME_WIDTH);
            }
        }
    }
}

fn pad_left(out: &mut String, text: &str, width: usize) {
    for _ in text.len()..width {
        out.push(' ');
    }
    out.push_str(text);
}
