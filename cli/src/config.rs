// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use guildevents_core::{APP_NAME, Config};

/// Loads the configuration file, falling back to defaults when there is none.
///
/// An explicitly given path must exist; the default location
/// (`$XDG_CONFIG_HOME/guildevents/config.toml` on unix) may be absent.
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (default_config_path()?, false),
    };

    if !path.exists() {
        if explicit {
            return Err(format!("No config found at: {}", path.display()).into());
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file: {e}"))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}").into())
}

fn default_config_path() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();

    let config_dir = config_dir.ok_or("User-specific config directory not found")?;
    Ok(config_dir.join(APP_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explicit_missing_config_is_an_error() {
        let result = parse_config(Some(PathBuf::from("/definitely/not/here.toml"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn config_file_overrides_defaults() {
        let dir = std::env::temp_dir().join("guildevents-cli-config-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("config.toml");
        tokio::fs::write(&path, "feed_url = \"https://feed.example.org\"\n")
            .await
            .unwrap();

        let config = parse_config(Some(path)).await.unwrap();
        assert_eq!(config.feed_url, "https://feed.example.org");
    }
}
