//! Default values for configuration fields that are left unset.

/// Admin API origin used when `api_base` is not configured.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Per-request timeout used when `timeout_secs` is not configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Name of the per-user and per-project configuration directory.
pub const CONFIG_DIR_NAME: &str = ".overlay-purge";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable carrying `cloudinary://<key>:<secret>@<cloud>`.
pub const CLOUDINARY_URL_ENV: &str = "CLOUDINARY_URL";

pub const LOG_LEVEL_ENV: &str = "OVERLAY_PURGE_LOG_LEVEL";
