//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.overlay-purge/config.toml`
//! 3. **Project config** - `./.overlay-purge/config.toml`
//! 4. **Environment** - `CLOUDINARY_URL` and `OVERLAY_PURGE_LOG_LEVEL`

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tracing::debug;

use crate::config::defaults::{
    CLOUDINARY_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOG_LEVEL_ENV,
};
use crate::config::types::{CloudinaryConfig, Credentials, PurgeConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Environment values that take precedence over config files.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub cloudinary_url: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            cloudinary_url: non_empty_var(CLOUDINARY_URL_ENV),
            log_level: non_empty_var(LOG_LEVEL_ENV),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// if `CLOUDINARY_URL` is malformed, or if validation fails. Missing config
/// files are not errors.
pub fn load_hierarchy() -> Result<PurgeConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| config_path_in(&home));
    let project_path = std::env::current_dir().ok().map(|cwd| config_path_in(&cwd));

    load_from_sources(
        user_path.as_deref(),
        project_path.as_deref(),
        &EnvOverrides::from_env(),
    )
}

/// `<dir>/.overlay-purge/config.toml`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load and merge the given sources. Split out from [`load_hierarchy`] so the
/// merge order can be exercised without touching the real home directory.
pub fn load_from_sources(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
    env: &EnvOverrides,
) -> Result<PurgeConfig, ConfigError> {
    let mut config = PurgeConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        if let Some(file_config) = load_config_file(path)? {
            debug!(event = "core.config.file_loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    let config = apply_env(config, env)?;
    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<PurgeConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Merge two configurations, with `override_config` taking precedence field by field.
pub fn merge_configs(base: PurgeConfig, override_config: PurgeConfig) -> PurgeConfig {
    let base_c = base.cloudinary;
    let over_c = override_config.cloudinary;

    PurgeConfig {
        log_level: override_config.log_level.or(base.log_level),
        cloudinary: CloudinaryConfig {
            cloud_name: over_c.cloud_name.or(base_c.cloud_name),
            api_key: over_c.api_key.or(base_c.api_key),
            api_secret: over_c.api_secret.or(base_c.api_secret),
            api_base: over_c.api_base.or(base_c.api_base),
            timeout_secs: over_c.timeout_secs.or(base_c.timeout_secs),
        },
    }
}

fn apply_env(mut config: PurgeConfig, env: &EnvOverrides) -> Result<PurgeConfig, ConfigError> {
    if let Some(raw) = &env.cloudinary_url {
        let creds = parse_cloudinary_url(raw)?;
        config.cloudinary.cloud_name = Some(creds.cloud_name);
        config.cloudinary.api_key = Some(creds.api_key);
        config.cloudinary.api_secret = Some(creds.api_secret);
    }
    if let Some(level) = &env.log_level {
        config.log_level = Some(level.clone());
    }
    Ok(config)
}

/// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
pub fn parse_cloudinary_url(raw: &str) -> Result<Credentials, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidCloudinaryUrl {
        message: e.to_string(),
    })?;

    if url.scheme() != "cloudinary" {
        return Err(ConfigError::InvalidCloudinaryUrl {
            message: format!("expected scheme 'cloudinary', got '{}'", url.scheme()),
        });
    }

    let cloud_name = url.host_str().unwrap_or_default();
    let api_key = url.username();
    let api_secret = url.password().unwrap_or_default();

    if cloud_name.is_empty() || api_key.is_empty() || api_secret.is_empty() {
        return Err(ConfigError::InvalidCloudinaryUrl {
            message: "expected cloudinary://<api_key>:<api_secret>@<cloud_name>".to_string(),
        });
    }

    Ok(Credentials {
        cloud_name: cloud_name.to_string(),
        api_key: api_key.to_string(),
        api_secret: api_secret.to_string(),
    })
}

/// Resolve the credentials from a merged config.
///
/// # Errors
///
/// [`ConfigError::MissingCredentials`] naming every field that is unset or blank.
pub fn credentials(config: &PurgeConfig) -> Result<Credentials, ConfigError> {
    let c = &config.cloudinary;
    let present = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (present(&c.cloud_name), present(&c.api_key), present(&c.api_secret)) {
        (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Credentials {
            cloud_name,
            api_key,
            api_secret,
        }),
        (cloud_name, api_key, api_secret) => {
            let missing: Vec<&str> = [
                ("cloud_name", cloud_name.is_none()),
                ("api_key", api_key.is_none()),
                ("api_secret", api_secret.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();
            Err(ConfigError::MissingCredentials {
                missing: missing.join(", "),
            })
        }
    }
}
