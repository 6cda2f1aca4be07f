mod schema;

pub use schema::{Config, DEFAULT_BORDER_COLOR, DEFAULT_TABLE_HEIGHT};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/repo-prs/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("repo-prs"))
}

/// Get the default config file path (~/.config/repo-prs/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed or holds invalid values
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config = read_config(&config_path)?;
    tracing::debug!(path = %config_path.display(), ?config, "loaded config");
    Ok(config)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.table_height == 0 {
        anyhow::bail!("table_height must be at least 1");
    }
    Ok(())
}
