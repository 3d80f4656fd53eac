use std::error::Error;

/// Base trait for all application errors
pub trait OverlayPurgeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the error comes from user input or configuration rather than a failure
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error(
        "Cloudinary credentials are missing ({missing}). Set CLOUDINARY_URL or add a [cloudinary] section to .overlay-purge/config.toml"
    )]
    MissingCredentials { missing: String },

    #[error("Invalid CLOUDINARY_URL: {message}")]
    InvalidCloudinaryUrl { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl OverlayPurgeError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingCredentials { .. } => "CONFIG_MISSING_CREDENTIALS",
            ConfigError::InvalidCloudinaryUrl { .. } => "CONFIG_INVALID_CLOUDINARY_URL",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::ReadFailed { .. })
    }
}
