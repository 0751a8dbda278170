use anyhow::{Context, Result};
use colsum_core::{ExportOptions, ImportOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn enabled() -> bool {
    true
}

/// Settings from `config.toml`. Every switch defaults to on, which is the
/// combination that reads back exactly what was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub import: ImportSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExportSection {
    #[serde(default = "enabled")]
    pub include_header: bool,
    #[serde(default = "enabled")]
    pub include_total: bool,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            include_header: true,
            include_total: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImportSection {
    #[serde(default = "enabled")]
    pub skip_header: bool,
    #[serde(default = "enabled")]
    pub skip_total: bool,
}

impl Default for ImportSection {
    fn default() -> Self {
        Self {
            skip_header: true,
            skip_total: true,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("No configuration file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        tracing::debug!("Loading configuration from {}", path.display());
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Export options with command-line `--no-*` flags applied on top.
    pub fn export_options(&self, no_header: bool, no_total: bool) -> ExportOptions {
        ExportOptions::new(
            self.export.include_header && !no_header,
            self.export.include_total && !no_total,
        )
    }

    pub fn import_options(&self, no_skip_header: bool, no_skip_total: bool) -> ImportOptions {
        ImportOptions::new(
            self.import.skip_header && !no_skip_header,
            self.import.skip_total && !no_skip_total,
        )
    }
}

pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "colsum", "colsum")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
