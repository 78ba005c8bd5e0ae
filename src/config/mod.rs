use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_cache_file_path, get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing portrait lookup settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the encyclopedia (summary, search, page images, page props).
    #[serde(default = "default_wikipedia_url")]
    pub wikipedia_url: String,
    /// Base URL of the structured-data service.
    #[serde(default = "default_wikidata_url")]
    pub wikidata_url: String,
    /// Base URL of the media file server.
    #[serde(default = "default_commons_url")]
    pub commons_url: String,
    /// Base URL of the initials avatar service.
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
    /// Base URL of the scouting backend. Profile lookups skip the backend when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    /// Path of the on-disk portrait cache. Defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_file_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every request. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Age in days after which a cached portrait is ignored.
    #[serde(default = "default_cache_ttl_days")]
    pub cache_ttl_days: u64,
    /// Deadline for the encyclopedia chain when resolving a full profile.
    #[serde(default = "default_lookup_deadline_ms")]
    pub lookup_deadline_ms: u64,
}

fn default_wikipedia_url() -> String {
    constants::endpoints::WIKIPEDIA.to_string()
}

fn default_wikidata_url() -> String {
    constants::endpoints::WIKIDATA.to_string()
}

fn default_commons_url() -> String {
    constants::endpoints::COMMONS.to_string()
}

fn default_avatar_url() -> String {
    constants::endpoints::AVATAR.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_ttl_days() -> u64 {
    constants::cache::DEFAULT_TTL_DAYS
}

fn default_lookup_deadline_ms() -> u64 {
    constants::DEFAULT_LOOKUP_DEADLINE_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wikipedia_url: default_wikipedia_url(),
            wikidata_url: default_wikidata_url(),
            commons_url: default_commons_url(),
            avatar_url: default_avatar_url(),
            backend_url: None,
            cache_file_path: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            cache_ttl_days: default_cache_ttl_days(),
            lookup_deadline_ms: default_lookup_deadline_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `SCOUT_PORTRAITS_WIKIPEDIA_URL` - Override encyclopedia base URL
    /// - `SCOUT_PORTRAITS_BACKEND_URL` - Override scouting backend base URL
    /// - `SCOUT_PORTRAITS_LOG_FILE` - Override log file path
    /// - `SCOUT_PORTRAITS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SCOUT_PORTRAITS_CACHE_TTL_DAYS` - Override cache TTL in days
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    /// Numeric overrides that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::WIKIPEDIA_URL) {
            self.wikipedia_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::BACKEND_URL) {
            self.backend_url = Some(url);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(days) = std::env::var(env_vars::CACHE_TTL_DAYS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.cache_ttl_days = days;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Cache TTL as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_days * 24 * 60 * 60)
    }

    /// Deadline for profile lookups as a duration
    pub fn lookup_deadline(&self) -> Duration {
        Duration::from_millis(self.lookup_deadline_ms)
    }

    /// The configured cache file path, or the default location inside the
    /// config directory
    pub fn resolved_cache_file_path(&self) -> String {
        self.cache_file_path
            .clone()
            .unwrap_or_else(get_cache_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Encyclopedia:     {}", config.wikipedia_url);
        println!("Structured data:  {}", config.wikidata_url);
        println!("Media files:      {}", config.commons_url);
        println!("Avatar service:   {}", config.avatar_url);
        println!(
            "Scouting backend: {}",
            config.backend_url.as_deref().unwrap_or("(not set)")
        );
        println!("────────────────────────────────────");
        println!("HTTP Timeout:     {} seconds", config.http_timeout_seconds);
        println!("Cache TTL:        {} days", config.cache_ttl_days);
        println!("Lookup deadline:  {} ms", config.lookup_deadline_ms);
        println!("────────────────────────────────────");
        println!("Cache File:");
        println!("{}", config.resolved_cache_file_path());
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/scout_portraits.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
