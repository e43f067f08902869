//! Filter settings files
//!
//! Settings files hold any subset of the filter settings as TOML and are
//! merged over the defaults. They are only ever read: the engine never
//! writes settings back.

mod error;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use slipreel_types::{FilterSettings, FilterSettingsPatch};

const CONFIG_DIR: &str = "slipreel";
const CONFIG_FILE: &str = "filter.toml";

/// `~/.config/slipreel/filter.toml` on Linux, the platform equivalent elsewhere
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read a settings patch from a TOML file
pub fn load_patch(path: &Path) -> Result<FilterSettingsPatch, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let patch: FilterSettingsPatch =
        toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), "Loaded filter settings");
    Ok(patch)
}

/// Read the explicit settings file, or the default one if it exists.
///
/// A missing default file is not an error and yields an empty patch. A
/// missing explicit file is.
pub fn resolve_patch(explicit: Option<&Path>) -> Result<FilterSettingsPatch, ConfigError> {
    if let Some(path) = explicit {
        return load_patch(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_patch(&path),
        _ => {
            tracing::debug!("No filter settings file found, using defaults");
            Ok(FilterSettingsPatch::default())
        }
    }
}

/// Render complete settings as TOML
pub fn settings_to_toml(settings: &FilterSettings) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(settings)?)
}
