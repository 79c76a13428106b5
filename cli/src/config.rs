// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI configuration file

use anyhow::{Context, Result};
use chain_reaction_core::GridSize;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Grid size for new games (2-10)
    #[serde(default)]
    pub grid_size: GridSize,
    /// Let the bot play Blue
    #[serde(default)]
    pub bot_enabled: bool,
    /// Snapshot file written after every move
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            bot_enabled: false,
            save_path: None,
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("io", "chain-reaction", "chain-reaction")
        .context("Failed to determine config directory")?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Load the config at `path`, writing the defaults there first if it is missing
pub fn load_config(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        tracing::info!("Config file not found, creating default at: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = CliConfig::default();
        save_config(path, &default_config)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str::<CliConfig>(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn save_config(path: &Path, config: &CliConfig) -> Result<()> {
    let toml_content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, toml_content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::info!("Saved config to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_creates_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config(&path).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CliConfig {
            grid_size: GridSize::new(7).unwrap(),
            bot_enabled: true,
            save_path: Some(PathBuf::from("game.json")),
        };

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_out_of_range_grid_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "grid_size = 11\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("grid size 11"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bot_enabled = true\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.bot_enabled);
        assert_eq!(config.grid_size.get(), 4);
    }
}
