//! Configuration type definitions for overlay-purge.
//!
//! # Example Configuration
//!
//! ```toml
//! log_level = "info"
//!
//! [cloudinary]
//! cloud_name = "demo"
//! api_key = "123456789012345"
//! api_secret = "abcdefghijklmnopqrstuvwxyz0"
//! api_base = "https://api.cloudinary.com"
//! timeout_secs = 60
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files and the environment.
///
/// Every field is optional so that a project config can override only the
/// values it cares about; defaults are applied at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PurgeConfig {
    /// Log level for the `overlay_purge` target (default: info)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Cloudinary account and transport settings
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
}

/// Cloudinary Admin API settings.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CloudinaryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,

    /// Admin API origin. Default: https://api.cloudinary.com
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds. Default: 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

// Hand-written so the secret never ends up in a log line.
impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Fully resolved credentials required to talk to the Admin API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
