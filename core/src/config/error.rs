//! Error types for settings file loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading filter settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}
