// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use guildevents_feed::FeedConfig;

/// The name of the GuildEvents application.
pub const APP_NAME: &str = "guildevents";

/// Where the Guild publishes the feed documents.
const DEFAULT_FEED_URL: &str = "https://guild-events.s3.eu-west-2.amazonaws.com";

/// Configuration for the GuildEvents application.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the feed host.
    pub feed_url: String,

    /// Directory for the cache database. `None` keeps everything in memory.
    pub state_dir: Option<PathBuf>,

    /// Network timeout per feed request, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            state_dir: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.state_dir {
            Some(dir) => {
                self.state_dir = Some(
                    expand_path(dir)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }

            None => match get_state_dir() {
                Ok(dir) => self.state_dir = Some(dir.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        }

        Ok(())
    }

    pub(crate) fn feed(&self) -> FeedConfig {
        FeedConfig {
            base_url: self.feed_url.clone(),
            timeout_secs: self.timeout_secs,
            ..FeedConfig::default()
        }
    }
}

/// Handle tilde (~) and the home environment variable in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_point_at_the_guild_feed() {
        let config = Config::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.state_dir.is_none());
    }

    #[test]
    fn config_parses_from_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            feed_url = "https://feed.example.org"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed_url, "https://feed.example.org");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn feed_config_carries_url_and_timeout() {
        let config = Config {
            feed_url: "https://feed.example.org".to_string(),
            timeout_secs: 10,
            ..Default::default()
        };

        let feed = config.feed();
        assert_eq!(feed.base_url, "https://feed.example.org");
        assert_eq!(feed.timeout_secs, 10);
    }

    #[test]
    fn expand_path_resolves_home_prefixes() {
        let home = get_home_dir().unwrap();
        let result = expand_path(&PathBuf::from("~/guildevents")).unwrap();
        assert_eq!(result, home.join("guildevents"));
        assert!(result.is_absolute());
    }

    #[test]
    fn expand_path_keeps_absolute_paths() {
        let absolute = PathBuf::from("/var/lib/guildevents");
        assert_eq!(expand_path(&absolute).unwrap(), absolute);
    }

    #[test]
    fn normalize_expands_configured_state_dir() {
        let mut config = Config {
            state_dir: Some(PathBuf::from("~/state")),
            ..Default::default()
        };
        config.normalize().unwrap();

        assert!(config.state_dir.unwrap().is_absolute());
    }
}
