//! # Configuration System
//!
//! Hierarchical TOML configuration for overlay-purge.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.overlay-purge/config.toml`
//! 3. **Project config** - `./.overlay-purge/config.toml`
//! 4. **Environment** - `CLOUDINARY_URL`, `OVERLAY_PURGE_LOG_LEVEL`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use overlay_purge_core::config::PurgeConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PurgeConfig::load_hierarchy()?;
//!     let credentials = config.credentials()?;
//!     println!("cloud: {}", credentials.cloud_name);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::time::Duration;

// Public API exports
pub use loading::EnvOverrides;
pub use types::{CloudinaryConfig, Credentials, PurgeConfig};
pub use validation::{VALID_LOG_LEVELS, validate_config};

impl PurgeConfig {
    /// Load configuration from the hierarchy of config files and the environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Resolve the Cloudinary credentials.
    ///
    /// See [`loading::credentials`] for details.
    pub fn credentials(&self) -> Result<Credentials, crate::errors::ConfigError> {
        loading::credentials(self)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn api_base(&self) -> &str {
        self.cloudinary
            .api_base
            .as_deref()
            .unwrap_or(defaults::DEFAULT_API_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.cloudinary
                .timeout_secs
                .unwrap_or(defaults::DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_defaults() {
        let config = PurgeConfig::default();
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.api_base(), "https://api.cloudinary.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_accessors_use_configured_values() {
        let mut config = PurgeConfig {
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.cloudinary.api_base = Some("http://localhost:8080".to_string());
        config.cloudinary.timeout_secs = Some(5);

        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.api_base(), "http://localhost:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
