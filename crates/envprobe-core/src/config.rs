use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::report::Page;

/// Response body format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// CGI `Content-Type` for bodies in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain; charset=utf-8",
            OutputFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Global configuration loaded from `~/.config/envprobe/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Body format when the command line does not choose one.
    #[serde(default)]
    pub format: OutputFormat,
    /// Page served when neither the command line, the script name nor PATH_INFO selects one.
    #[serde(default)]
    pub default_page: Page,
    /// PATH_INFO suffixes linked from the PATH_INFO test page.
    #[serde(default = "default_example_paths")]
    pub example_paths: Vec<String>,
}

fn default_example_paths() -> Vec<String> {
    ["/users", "/users/123", "/api/v1/products"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            default_page: Page::default(),
            example_paths: default_example_paths(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("envprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration without writing anything. A missing file yields defaults.
///
/// Used in CGI mode, where the server user's home is often read-only.
pub fn load_or_default() -> Result<ProbeConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("envprobe")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from_path(&path),
        None => Ok(ProbeConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<ProbeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
