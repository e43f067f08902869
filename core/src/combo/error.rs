//! Error types for combo file loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a combo file produced by the replay parser
#[derive(Debug, Error)]
pub enum ComboFileError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse combo JSON in {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
