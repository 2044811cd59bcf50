//! TOML Configuration File Support
//!
//! Loads the console's startup configuration from a TOML file at
//! `~/.config/apiman-console/console.toml`.
//!
//! # Configuration Priority
//!
//! The file location can be overridden with the `APIMAN_CONSOLE_CONFIG`
//! environment variable. Values come from the file when it exists, falling
//! back to defaults otherwise; a missing file is not an error.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! transport = ["http", "https"]
//! security_scheme = ["oauth2"]
//!
//! [permissions]
//! can_edit = true
//! multi_level_security = true
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiConfiguration;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "APIMAN_CONSOLE_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root of the console's TOML configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleToml {
    /// Initial API configuration shown in the forms.
    pub api: ApiToml,
    /// Permission flags for the current user.
    pub permissions: PermissionsToml,
}

/// `[api]` section: the initial configuration snapshot.
///
/// Field defaults are deliberately not struct-level: when the section is
/// present, an omitted `transport` key means an undefined transport set, not
/// the out-of-the-box one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiToml {
    /// Transports the API is exposed over. Omit the key entirely to start
    /// with an undefined transport set.
    pub transport: Option<Vec<String>>,
    /// Enabled security schemes.
    #[serde(default)]
    pub security_scheme: Vec<String>,
}

impl Default for ApiToml {
    fn default() -> Self {
        Self {
            transport: Some(vec![
                crate::transport::HTTP.to_string(),
                crate::transport::HTTPS.to_string(),
            ]),
            security_scheme: vec![crate::scheme::OAUTH2.to_string()],
        }
    }
}

impl ApiToml {
    /// Build the configuration snapshot the forms render from.
    #[must_use]
    pub fn to_configuration(&self) -> ApiConfiguration {
        ApiConfiguration {
            transport: self
                .transport
                .as_ref()
                .map(|t| t.iter().cloned().collect()),
            security_scheme: self.security_scheme.iter().cloned().collect(),
        }
    }
}

/// `[permissions]` section: advisory flags threaded into the panels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsToml {
    /// Whether the current user may edit the configuration. Controls render
    /// disabled, never hidden, when this is false.
    pub can_edit: bool,
    /// Whether mutual TLS may be combined with other schemes.
    pub multi_level_security: bool,
}

impl Default for PermissionsToml {
    fn default() -> Self {
        Self {
            can_edit: true,
            multi_level_security: true,
        }
    }
}

/// Default configuration file path (XDG config directory), unless overridden
/// by [`CONFIG_PATH_ENV`].
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|p| p.join("apiman-console").join("console.toml"))
}

/// Load configuration from the default path.
///
/// A missing config file is not an error; defaults are used.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config() -> Result<ConsoleToml, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ConsoleToml, ConfigError> {
    let Some(config_path) = path else {
        return Ok(ConsoleToml::default());
    };

    if !config_path.exists() {
        tracing::debug!(
            path = %config_path.display(),
            "Config file not found, using defaults"
        );
        return Ok(ConsoleToml::default());
    }

    let toml_content =
        std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
            path: config_path.clone(),
            source: e,
        })?;
    let config: ConsoleToml = toml::from_str(&toml_content)?;

    tracing::info!(
        path = %config_path.display(),
        "Loaded configuration from file"
    );
    Ok(config)
}
