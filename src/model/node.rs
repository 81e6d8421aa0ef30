// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::path::ZPath;

/// Per-node metadata as reported by the server.
///
/// Times are milliseconds since the Unix epoch; transaction ids are server zxids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeStat {
    pub czxid: i64,
    pub mzxid: i64,
    pub pzxid: i64,
    pub version: i32,
    pub cversion: i32,
    pub aversion: i32,
    pub ctime: i64,
    pub mtime: i64,
    pub ephemeral_owner: i64,
    pub data_length: i32,
    pub num_children: i32,
}

/// One visited node of a walk.
///
/// `level` is the distance from the walk root and is fixed at visit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    path: ZPath,
    level: u32,
    payload: Vec<u8>,
    stat: NodeStat,
}

impl NodeRecord {
    pub fn new(path: ZPath, level: u32, payload: Vec<u8>, stat: NodeStat) -> Self {
        Self { path, level, payload, stat }
    }

    pub fn path(&self) -> &ZPath {
        &self.path
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn stat(&self) -> &NodeStat {
        &self.stat
    }
}
