use crate::api::ApiError;
use crate::errors::OverlayPurgeError;

#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    #[error("Overlay image name must not be empty")]
    EmptyOverlay,

    #[error("Transformation '{name}' has a missing or malformed 'used' flag")]
    MalformedEntry { name: String },

    #[error("Cloudinary API call failed: {source}")]
    Api {
        #[from]
        source: ApiError,
    },
}

impl OverlayPurgeError for PurgeError {
    fn error_code(&self) -> &'static str {
        match self {
            PurgeError::EmptyOverlay => "PURGE_EMPTY_OVERLAY",
            PurgeError::MalformedEntry { .. } => "PURGE_MALFORMED_ENTRY",
            PurgeError::Api { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PurgeError::EmptyOverlay => true,
            PurgeError::MalformedEntry { .. } => false,
            PurgeError::Api { source } => source.is_user_error(),
        }
    }
}
