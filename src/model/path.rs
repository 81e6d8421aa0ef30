// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use smallvec::SmallVec;

pub const SEPARATOR: char = '/';

/// A normalized absolute namespace path such as `/app/config`.
///
/// Normalization is purely lexical: duplicate separators collapse, `.` segments are dropped,
/// `..` pops the previous segment (a no-op at the root) and trailing separators are removed.
/// The root is always `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZPath {
    value: String,
}

impl ZPath {
    pub fn root() -> Self {
        Self { value: SEPARATOR.to_string() }
    }

    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        if !raw.starts_with(SEPARATOR) {
            return Err(PathError::NotAbsolute { path: raw.to_owned() });
        }
        Ok(Self { value: clean(raw) })
    }

    /// Joins a child name onto this path and normalizes the result.
    pub fn join(&self, name: &str) -> Self {
        let mut raw = String::with_capacity(self.value.len() + 1 + name.len());
        raw.push_str(&self.value);
        raw.push(SEPARATOR);
        raw.push_str(name);
        Self { value: clean(&raw) }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    pub fn is_root(&self) -> bool {
        self.value.len() == 1
    }

    pub fn parent(&self) -> Option<&str> {
        parent_of(&self.value)
    }

    pub fn base_name(&self) -> &str {
        base_name_of(&self.value)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.value.split(SEPARATOR).filter(|segment| !segment.is_empty())
    }

    /// Number of segments below the root (`/` is 0, `/a/b` is 2).
    pub fn depth(&self) -> usize {
        if self.is_root() {
            return 0;
        }
        memchr::memchr_iter(b'/', self.value.as_bytes()).count()
    }

    /// The prefix of this path made of its first `depth` segments.
    pub fn ancestor(&self, depth: usize) -> Option<&str> {
        if depth == 0 {
            return Some("/");
        }
        let own_depth = self.depth();
        if depth > own_depth {
            return None;
        }
        if depth == own_depth {
            return Some(&self.value);
        }
        memchr::memchr_iter(b'/', self.value.as_bytes()).nth(depth).map(|idx| &self.value[..idx])
    }
}

impl fmt::Display for ZPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ZPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ZPath {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ZPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path must not be empty")]
    Empty,
    #[error("path {path:?} must start with '/'")]
    NotAbsolute { path: String },
}

/// Parent directory of a normalized path; `None` for the root.
pub(crate) fn parent_of(path: &str) -> Option<&str> {
    if path.len() <= 1 {
        return None;
    }
    match memchr::memrchr(b'/', path.as_bytes()) {
        Some(0) => Some("/"),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

/// Final segment of a normalized path; the root names itself.
pub(crate) fn base_name_of(path: &str) -> &str {
    if path.len() <= 1 {
        return path;
    }
    match memchr::memrchr(b'/', path.as_bytes()) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn clean(raw: &str) -> String {
    let mut stack = SmallVec::<[&str; 16]>::new();
    for segment in raw.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return SEPARATOR.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    for segment in &stack {
        out.push(SEPARATOR);
        out.push_str(segment);
    }
    out
}
