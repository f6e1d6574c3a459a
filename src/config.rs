use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Default base URL for the upstream NFL data API. Per-namespace URLs
/// (scores, stats, odds, projections) are derived from this.
pub const DEFAULT_API_BASE_URL: &str = "https://api.sportsdata.io/v3/nfl";

/// Configuration structure for the context pipeline.
/// Handles loading, saving, and managing settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key sent in the subscription header on every upstream request.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the upstream data API. Namespace segments are appended.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; defaults are used instead.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SPORTSDATA_API_KEY` - Upstream API key
    /// - `SPORTSBIFF_API_BASE_URL` - Override API base URL
    /// - `SPORTSBIFF_LOG_FILE` - Override log file path
    /// - `SPORTSBIFF_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            config.api_key = api_key;
        }

        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            config.api_base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(AppError::config_error(format!(
                "api_base_url must include an http(s) scheme, got: {}",
                self.api_base_url
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "http_timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves current configuration to a specific path. Creates parent
    /// directories as needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_path = Path::new(path);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a specific TOML file path without applying
    /// environment overrides. Used by tests and embedding applications.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Returns the platform-specific path for the config file.
/// Falls back to the current directory if no config directory is available.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("sportsbiff").join("config.toml"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "config.toml".to_string())
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("sportsbiff").join("logs"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "logs".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();

        let config = Config {
            api_key: "test-key".to_string(),
            api_base_url: "https://api.example.com/v3/nfl".to_string(),
            log_file_path: None,
            http_timeout_seconds: 15,
        };
        config.save_to_path(&path_str).await.expect("save");

        let loaded = Config::load_from_path(&path_str).await.expect("load");
        assert_eq!(loaded.api_key, "test-key");
        assert_eq!(loaded.api_base_url, "https://api.example.com/v3/nfl");
        assert_eq!(loaded.http_timeout_seconds, 15);
    }

    #[tokio::test]
    async fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "api_key = \"abc\"\n")
            .await
            .expect("write");

        let loaded = Config::load_from_path(&path.to_string_lossy())
            .await
            .expect("load");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            loaded.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config {
            api_base_url: "api.example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
