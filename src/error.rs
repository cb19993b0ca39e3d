// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for catalog persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the catalog store. All of them end the run; the
/// engine never retries against a partially written document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document does not exist.
    #[error("catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document exists but is not a valid string catalog.
    #[error("invalid catalog {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the document failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::NotFound { path }
            | CatalogError::Format { path, .. }
            | CatalogError::Io { path, .. } => path,
        }
    }
}
