//! # Shell Configuration
//!
//! Settings for the terminal shell.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     DELIVO_USER_NAME=Ann                                                │
//! │     DELIVO_STRICT_TRANSITIONS=true                                      │
//! │     DELIVO_RECEIPT_FORMAT=json                                          │
//! │     DELIVO_LOG=delivo_core=debug                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     --config <path>, else DELIVO_CONFIG, else                           │
//! │     ~/.config/delivo/delivo.toml (Linux)                                │
//! │     ~/Library/Application Support/com.delivo.delivo/delivo.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     Guest, permissive, text receipts, "warn"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # delivo.toml
//! user_name = "Ann"
//! transition_policy = "strict"   # permissive | strict
//! receipt_format = "json"        # text | json
//! log_filter = "delivo_core=info"
//! ```

use std::path::{Path, PathBuf};

use delivo_core::validation::validate_user_name;
use delivo_core::TransitionPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

// =============================================================================
// Receipt Format
// =============================================================================

/// How checkout receipts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// `Order #1 | Total $15.50 | PLACED`
    #[default]
    Text,

    /// Pretty-printed order summary.
    Json,
}

impl std::str::FromStr for ReceiptFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "receipt_format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Shell Configuration
// =============================================================================

/// Everything the shell reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name of the single customer the session runs as.
    pub user_name: String,

    /// Which status changes the admin menu may make.
    pub transition_policy: TransitionPolicy,

    pub receipt_format: ReceiptFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            user_name: "Guest".to_string(),
            transition_policy: TransitionPolicy::Permissive,
            receipt_format: ReceiptFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from file and the process environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`ShellConfig::load`], with environment lookups going through
    /// `env`.
    ///
    /// An explicit path (argument or `DELIVO_CONFIG`) must exist. The
    /// platform default path is optional.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = config_path.or_else(|| env("DELIVO_CONFIG").map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading shell config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `DELIVO_*` overrides. Unparseable values are errors rather
    /// than silently ignored.
    pub fn apply_overrides<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = env("DELIVO_USER_NAME") {
            debug!(user_name = %name, "Overriding user name from environment");
            self.user_name = name;
        }

        if let Some(value) = env("DELIVO_STRICT_TRANSITIONS") {
            let strict = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: "DELIVO_STRICT_TRANSITIONS".to_string(),
                value: value.clone(),
            })?;
            self.transition_policy = if strict {
                TransitionPolicy::Strict
            } else {
                TransitionPolicy::Permissive
            };
        }

        if let Some(value) = env("DELIVO_RECEIPT_FORMAT") {
            self.receipt_format = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DELIVO_RECEIPT_FORMAT".to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(filter) = env("DELIVO_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Validates the configuration and normalizes the user name.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.user_name = validate_user_name(&self.user_name)?;

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log_filter".to_string(),
                value: self.log_filter.clone(),
            });
        }

        Ok(())
    }

    /// Platform config location, e.g. `~/.config/delivo/delivo.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "delivo", "delivo")
            .map(|dirs| dirs.config_dir().join("delivo.toml"))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
