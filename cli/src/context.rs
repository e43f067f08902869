use anyhow::Context;
use slipreel_core::config::{self, FilterSettingsPatch};
use slipreel_core::{ComboFilter, FilterSettings};
use std::path::{Path, PathBuf};

/// Settings resolved for one CLI invocation.
/// Layers, lowest first: defaults, settings file, command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Settings file in use, if any
    pub config_path: Option<PathBuf>,
    patch: FilterSettingsPatch,
}

impl CliContext {
    pub fn load(explicit_config: Option<&Path>) -> anyhow::Result<Self> {
        let patch = config::resolve_patch(explicit_config).context("loading filter settings")?;
        let config_path = explicit_config
            .map(Path::to_path_buf)
            .or_else(|| config::default_config_path().filter(|p| p.is_file()));
        Ok(Self { config_path, patch })
    }

    /// Layer command-line overrides on top of the file settings
    pub fn with_overrides(mut self, overrides: FilterSettingsPatch) -> Self {
        self.patch = self.patch.overlay(overrides);
        self
    }

    pub fn settings(&self) -> FilterSettings {
        FilterSettings::default().merged(&self.patch)
    }

    pub fn combo_filter(&self) -> ComboFilter {
        ComboFilter::new(Some(self.patch.clone()))
    }
}
