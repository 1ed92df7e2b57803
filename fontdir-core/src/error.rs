//! Error taxonomy for font directory scans

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Failures surfaced by the scanner entry points.
///
/// Unreadable `.afm` files are not represented here: they are skipped and the
/// scan continues. A lookup that finds nothing returns `Ok(None)`.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {path:?}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid configuration: {key} = {value:?}")]
    InvalidConfig { key: String, value: String },
}

impl ScanError {
    pub(crate) fn directory_access(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        ScanError::DirectoryAccess { path, source }
    }

    /// The engine error carried by this failure, if the PDF engine raised it.
    pub fn engine_error(&self) -> Option<&EngineError> {
        match self {
            ScanError::Engine(err) => Some(err),
            _ => None,
        }
    }
}
