// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::model::{NodeStat, SortedRecords, ZPath};

#[derive(Debug, Serialize)]
struct JsonNode<'a> {
    path: &'a ZPath,
    level: u32,
    stat: &'a NodeStat,
    /// Base64 payload; present only when payloads were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

/// Writes the records as a pretty-printed JSON array followed by a newline.
pub fn write_json(
    out: &mut impl Write,
    records: &SortedRecords,
    include_data: bool,
) -> io::Result<()> {
    let nodes = records
        .iter()
        .map(|record| JsonNode {
            path: record.path(),
            level: record.level(),
            stat: record.stat(),
            data: include_data.then(|| STANDARD.encode(record.payload())),
        })
        .collect::<Vec<_>>();

    serde_json::to_writer_pretty(&mut *out, &nodes)?;
    writeln!(out)
}
