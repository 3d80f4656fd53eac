use crate::errors::OverlayPurgeError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(
        "API rate limit has been reached. Try after 1 hour or reach out to Cloudinary Support"
    )]
    RateLimited,

    #[error("Cloudinary rejected the credentials (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Cloudinary returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request to Cloudinary failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Failed to decode Cloudinary response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl OverlayPurgeError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::RateLimited => "API_RATE_LIMITED",
            ApiError::Unauthorized { .. } => "API_UNAUTHORIZED",
            ApiError::NotFound { .. } => "API_NOT_FOUND",
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Transport { .. } => "API_TRANSPORT",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
