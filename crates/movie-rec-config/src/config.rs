use serde::{Deserialize, Serialize};
use std::path::Path;

/// Client configuration. Every section and field has a default so a
/// missing or partial config file still yields a working setup pointed
/// at a local backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub preload: PreloadConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Recommender and feedback-store endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
    /// Default user identity for commands that do not pass --user.
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Poster CDN settings. `fallback_asset` is the asset identifier handed
/// to the presentation layer when no poster path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
    #[serde(default = "default_size_bucket")]
    pub size_bucket: String,
    #[serde(default = "default_fallback_asset")]
    pub fallback_asset: String,
    #[serde(default = "default_images_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloadConfig {
    #[serde(default = "default_preload_enabled")]
    pub enabled: bool,
    #[serde(default = "default_preload_concurrency")]
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_cdn_base() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_size_bucket() -> String {
    "w500".to_string()
}

fn default_fallback_asset() -> String {
    "/placeholder-poster.jpg".to_string()
}

fn default_images_timeout_secs() -> u64 {
    15
}

fn default_preload_enabled() -> bool {
    true
}

fn default_preload_concurrency() -> usize {
    5
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_api_timeout_secs(),
            user_id: None,
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cdn_base: default_cdn_base(),
            size_bucket: default_size_bucket(),
            fallback_asset: default_fallback_asset(),
            timeout_secs: default_images_timeout_secs(),
        }
    }
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            enabled: default_preload_enabled(),
            concurrency: default_preload_concurrency(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api.base_url cannot be empty"));
        }
        if self.images.cdn_base.trim().is_empty() {
            return Err(anyhow::anyhow!("images.cdn_base cannot be empty"));
        }
        if self.preload.concurrency == 0 {
            return Err(anyhow::anyhow!("preload.concurrency must be at least 1"));
        }
        if self.retry.max_attempts == 0 {
            return Err(anyhow::anyhow!("retry.max_attempts must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.images.cdn_base, "https://image.tmdb.org/t/p");
        assert_eq!(config.images.size_bucket, "w500");
        assert_eq!(config.preload.concurrency, 5);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay_ms, 1000);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://movies.example.com"
            user_id = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://movies.example.com");
        assert_eq!(config.api.user_id, Some(12));
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.images.size_bucket, "w500");
        assert!(config.preload.enabled);
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.preload.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.user_id = Some(3);
        config.preload.concurrency = 8;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.user_id, Some(3));
        assert_eq!(loaded.preload.concurrency, 8);
    }
}
