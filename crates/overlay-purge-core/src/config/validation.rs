//! Configuration validation.

use reqwest::Url;

use crate::config::types::PurgeConfig;
use crate::errors::ConfigError;

/// Log levels accepted by `log_level` / `OVERLAY_PURGE_LOG_LEVEL`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Validate the merged configuration.
///
/// Credentials are not checked here; they are only required once a client is
/// built, see [`crate::config::loading::credentials`].
pub fn validate_config(config: &PurgeConfig) -> Result<(), ConfigError> {
    if let Some(level) = &config.log_level
        && !VALID_LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Invalid log_level '{}'. Valid options: {}",
                level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(base) = &config.cloudinary.api_base {
        let url = Url::parse(base).map_err(|e| ConfigError::InvalidConfiguration {
            message: format!("Invalid api_base '{base}': {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("Invalid api_base '{base}': scheme must be http or https"),
            });
        }
    }

    if config.cloudinary.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(())
}
