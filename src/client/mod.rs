// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Remote tree access.
//!
//! The walker only needs two read operations; [`TreeClient`] is the seam between it and either a
//! live ensemble ([`zk::ZkClient`]) or an in-memory namespace ([`MemoryTree`]).

use std::fmt;
use std::io;

use crate::model::{NodeStat, ZPath};

pub mod fixtures;
pub mod memory;
pub mod zk;

pub use memory::MemoryTree;
pub use zk::{ZkClient, ZkConfig};

/// Read-only access to a hierarchical namespace.
pub trait TreeClient {
    /// Payload and metadata of a single node.
    fn get(&mut self, path: &ZPath) -> Result<(Vec<u8>, NodeStat), ClientError>;

    /// Immediate child names of a node, in server order.
    fn list_children(&mut self, path: &ZPath) -> Result<(Vec<String>, NodeStat), ClientError>;
}

/// Server-side error code carried in a reply header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const SYSTEM_ERROR: Self = Self(-1);
    pub const CONNECTION_LOSS: Self = Self(-4);
    pub const MARSHALLING_ERROR: Self = Self(-5);
    pub const UNIMPLEMENTED: Self = Self(-6);
    pub const OPERATION_TIMEOUT: Self = Self(-7);
    pub const BAD_ARGUMENTS: Self = Self(-8);
    pub const NO_NODE: Self = Self(-101);
    pub const NO_AUTH: Self = Self(-102);
    pub const SESSION_EXPIRED: Self = Self(-112);

    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::SYSTEM_ERROR => "SystemError",
            Self::CONNECTION_LOSS => "ConnectionLoss",
            Self::MARSHALLING_ERROR => "MarshallingError",
            Self::UNIMPLEMENTED => "Unimplemented",
            Self::OPERATION_TIMEOUT => "OperationTimeout",
            Self::BAD_ARGUMENTS => "BadArguments",
            Self::NO_NODE => "NoNode",
            Self::NO_AUTH => "NoAuth",
            Self::SESSION_EXPIRED => "SessionExpired",
            _ => return None,
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "error code {}", self.0),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("server returned {code} for {path}")]
    Server { path: String, code: ErrorCode },
    #[error("no server reachable among {addrs:?}")]
    Unreachable { addrs: Vec<String> },
    #[error("session is closed")]
    Closed,
}
