// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traversal errors.
//!
//! Failing scripts are never errors; these cover a test tree that cannot be
//! walked at all.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The test root is missing or is not a directory.
    #[error("test directory {} does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A directory inside the tree could not be listed.
    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file-name pattern failed to compile.
    #[error("invalid file pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },
}
