use crate::error::AppError;
use std::path::Path;

use super::Config;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every service URL must start with `http://` or `https://`
/// - The backend URL, when present, follows the same rule
/// - HTTP timeout and cache TTL must be non-zero
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_service_url("wikipedia_url", &config.wikipedia_url)?;
    validate_service_url("wikidata_url", &config.wikidata_url)?;
    validate_service_url("commons_url", &config.commons_url)?;
    validate_service_url("avatar_url", &config.avatar_url)?;
    if let Some(backend_url) = &config.backend_url {
        validate_service_url("backend_url", backend_url)?;
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least one second"));
    }
    if config.cache_ttl_days == 0 {
        return Err(AppError::config_error("Cache TTL must be at least one day"));
    }

    if let Some(cache_path) = &config.cache_file_path
        && cache_path.is_empty()
    {
        return Err(AppError::config_error("Cache file path cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_service_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https:// (got '{url}')"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = Config {
            wikipedia_url: "en.wikipedia.org".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("wikipedia_url"));
    }

    #[test]
    fn test_rejects_bad_backend_url() {
        let config = Config {
            backend_url: Some("localhost:8000".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_ttl_and_timeout() {
        let zero_ttl = Config {
            cache_ttl_days: 0,
            ..Config::default()
        };
        assert!(validate_config(&zero_ttl).is_err());

        let zero_timeout = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&zero_timeout).is_err());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_creates_log_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("portraits.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
