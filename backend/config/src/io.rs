//! Config file discovery and loading.

use crate::schema::LiveroomConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the liveroom config directory.
/// Priority: `LIVEROOM_CONFIG_DIR` env > `~/.liveroom/` > `./.liveroom/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LIVEROOM_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".liveroom"),
        None => PathBuf::from(".liveroom"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<LiveroomConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(LiveroomConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file is valid YAML `null`; treat it as an empty config.
    if raw.trim().is_empty() {
        return Ok(LiveroomConfig::default());
    }

    let config: LiveroomConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("liveroom-io-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let cfg = load_config(&temp_path("absent.yaml")).await.unwrap();
        assert!(cfg.web.is_none());
    }

    #[tokio::test]
    async fn reads_yaml_file() {
        let path = temp_path("present.yaml");
        fs::write(&path, "web:\n  baseUrl: https://example.test\n")
            .await
            .unwrap();
        let cfg = load_config(&path).await.unwrap();
        fs::remove_file(&path).await.unwrap();
        assert_eq!(cfg.web().base_url.as_deref(), Some("https://example.test"));
    }

    #[tokio::test]
    async fn invalid_yaml_is_an_error() {
        let path = temp_path("broken.yaml");
        fs::write(&path, "web: [unclosed").await.unwrap();
        let result = load_config(&path).await;
        fs::remove_file(&path).await.unwrap();
        assert!(result.is_err());
    }
}
