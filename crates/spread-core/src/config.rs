use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::items;
use crate::mapping::MalformedLines;

pub const DEFAULT_MAPPING_PATH: &str = "items.txt";
pub const DEFAULT_OUTPUT_CSV: &str = "item_api_mapping.csv";
pub const DEFAULT_BASE_URL: &str = "https://albion-online-data.com/api/v2/stats/prices";
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Martlock",
    "Bridgewatch",
    "Lymhurst",
    "Fort Sterling",
    "Thetford",
    "Caerleon",
];

/// Global configuration loaded from `~/.config/spread/config.toml`.
///
/// Relative paths are resolved against the working directory of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpreadConfig {
    /// Colon-delimited mapping file (`ordinal:identifier:name`).
    pub mapping_path: PathBuf,
    /// CSV output, overwritten on every run.
    pub output_csv: PathBuf,
    /// Price endpoint; identifiers are appended as a path segment.
    pub base_url: String,
    /// Market locations, in query order.
    pub locations: Vec<String>,
    /// Optional inline request list; the built-in list is used when both this
    /// and `items_file` are missing.
    #[serde(default)]
    pub items: Option<Vec<String>>,
    /// Optional file with one item name per line; takes precedence over `items`.
    #[serde(default)]
    pub items_file: Option<PathBuf>,
    /// Handling of mapping lines without an identifier: "skip" (default) or "strict".
    #[serde(default)]
    pub malformed_lines: MalformedLines,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            base_url: DEFAULT_BASE_URL.to_string(),
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            items: None,
            items_file: None,
            malformed_lines: MalformedLines::Skip,
        }
    }
}

impl SpreadConfig {
    /// Request list from `items_file`, then `items`, then the built-in list.
    pub fn request_items(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.items_file {
            return items::load_item_list(path);
        }
        Ok(self.items.clone().unwrap_or_else(items::default_items))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spread")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SpreadConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SpreadConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file; it must exist.
pub fn load_from(path: &Path) -> Result<SpreadConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SpreadConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

fn write_config(path: &Path, cfg: &SpreadConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
