//! Template engine error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during template discovery and composition
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Filesystem failure while scanning for templates. A partial scan could
    /// select the wrong default, so these are never swallowed.
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unbalanced or duplicated generated-block markers; editing such a
    /// document would corrupt it.
    #[error("Malformed generated block: {0}")]
    Structural(String),
}

impl TemplateError {
    pub(crate) fn scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Scan {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from marker validation rather than I/O
    pub fn is_structural(&self) -> bool {
        matches!(self, TemplateError::Structural(_))
    }
}
