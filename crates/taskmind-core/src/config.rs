use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::Deserialize;
use tracing::{debug, info, warn};

const CONFIG_ENV_VAR: &str = "TASKMIND_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub data: DataSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
    #[serde(default)]
    pub location: Option<String>,
}

impl Config {
    /// Loads the TOML config. Precedence for the file location:
    /// `--config` flag, then `TASKMIND_CONFIG`, then
    /// `~/.config/taskmind/config.toml`. A missing file means defaults.
    #[tracing::instrument(skip(override_path))]
    pub fn load(override_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = resolve_config_path(override_path)? else {
            warn!("no config file found, using defaults");
            return Ok(Config::default());
        };

        if !path.exists() {
            if override_path.is_some() {
                return Err(anyhow!("config file not found: {}", path.display()));
            }
            debug!(config = %path.display(), "config file not present, using defaults");
            return Ok(Config::default());
        }

        info!(config = %path.display(), "loading config");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cfg: Config =
            toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn color_enabled(&self) -> anyhow::Result<bool> {
        let Some(raw) = self.color.as_deref() else {
            return Ok(true);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => Ok(true),
            "off" | "no" | "false" | "0" => Ok(false),
            other => Err(anyhow!("invalid color setting: {other}")),
        }
    }
}

/// Data directory precedence: `--data` flag, then `data.location` from the
/// config, then `~/.local/share/taskmind`. Created when absent.
#[tracing::instrument(skip(cfg, override_dir))]
pub fn resolve_data_dir(cfg: &Config, override_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let dir = if let Some(path) = override_dir {
        path.to_path_buf()
    } else if let Some(location) = cfg.data.location.as_deref() {
        expand_tilde(Path::new(location))
    } else {
        default_data_dir()?
    };

    if !dir.exists() {
        info!(dir = %dir.display(), "creating data directory");
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    Ok(dir)
}

fn resolve_config_path(override_path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = override_path {
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        let trimmed = env_path.trim();
        if !trimmed.is_empty() {
            return Ok(Some(expand_tilde(Path::new(trimmed))));
        }
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(None);
    };
    Ok(Some(config_dir.join("taskmind").join("config.toml")))
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| anyhow!("cannot determine data directory"))?;
    Ok(base.join("taskmind"))
}

fn expand_tilde(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    if let Some(rest) = text.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn color_defaults_on_and_parses_common_spellings() {
        let cfg = Config::default();
        assert!(cfg.color_enabled().unwrap());

        let cfg: Config = toml::from_str("color = \"off\"").unwrap();
        assert!(!cfg.color_enabled().unwrap());

        let cfg: Config = toml::from_str("color = \"purple\"").unwrap();
        assert!(cfg.color_enabled().is_err());
    }

    #[test]
    fn data_location_is_read_from_the_data_section() {
        let cfg: Config = toml::from_str("[data]\nlocation = \"/tmp/taskmind\"").unwrap();
        assert_eq!(cfg.data.location.as_deref(), Some("/tmp/taskmind"));
    }
}
