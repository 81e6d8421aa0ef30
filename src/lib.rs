// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Zktree: list a ZooKeeper namespace as a flat listing or a box-drawing tree.
//!
//! The pipeline is [`walk::walk`] (bounded, failure-tolerant snapshot), then
//! [`walk::Snapshot::into_sorted`] (one byte-wise sort), then the sinks in [`render`].

pub mod client;
pub mod config;
pub mod model;
pub mod render;
pub mod walk;
