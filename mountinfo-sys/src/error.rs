// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use thiserror::Error;

/// Error types for mount table parsing and path resolution
#[derive(Error, Debug)]
pub enum MountInfoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed mountinfo record ({reason}): {line}")]
    MalformedRecord { line: String, reason: String },

    #[error("cannot decode mount field {value:?}: {reason}")]
    Encoding { value: String, reason: String },

    #[error("no mount governs {}", .0.display())]
    NoMatchingMount(PathBuf),

    #[error("cannot resolve path: {0}")]
    PathResolution(String),
}

impl MountInfoError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn encoding(value: &str, reason: impl Into<String>) -> Self {
        Self::Encoding {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for mountinfo operations
pub type Result<T> = std::result::Result<T, MountInfoError>;
