// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Namespace paths plus the node records a walk produces.

pub mod collection;
pub mod node;
pub mod path;

pub use collection::SortedRecords;
pub use node::{NodeRecord, NodeStat};
pub use path::{PathError, ZPath};
