use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// On-disk configuration, deserialized from `.ackr/config.toml`.
///
/// Every field is optional. Command-line arguments take precedence, and
/// anything still unset falls back to auto-detection or the built-in
/// defaults (max depth 1, clean-up on).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Input folder(s) to scan, e.g. `Carthage/Checkouts`.
    #[serde(default)]
    pub input: Vec<PathBuf>,
    /// Output folder, e.g. `MyProject/Settings.bundle`.
    pub output: Option<PathBuf>,
    /// Maximum folder depth to look for licenses.
    pub max_depth: Option<usize>,
    /// Whether to remove previously generated license documents first.
    pub clean_up: Option<bool>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.ackr/config.toml`
/// 3. `~/.config/ackr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = cwd.join(".ackr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("ackr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
