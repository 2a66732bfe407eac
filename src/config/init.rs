use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::scoring::ScoringConfig;

/// Write a starter config file populated with the default judgment matrix
/// and model parameters, ready for hand-editing.
///
/// Uses the default config path unless `path` is given. Refuses to clobber
/// an existing file.
pub fn write_default_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() {
        anyhow::bail!(
            "Config already exists at {}. Remove it first to regenerate.",
            config_path.display()
        );
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
