//! Application settings.
//!
//! Settings come from an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! locale = "de-DE"
//! default_tip_percent = 18
//! notification_ms = 2000
//! log_level = "info"
//!
//! [strings]
//! tip_calculate = "Go"
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::format::CurrencyFormat;
use crate::form::DEFAULT_TIP_PERCENT;
use crate::i18n::{CatalogError, MessageKey, StringCatalog};

/// How long a toast stays up by default, in milliseconds.
pub const DEFAULT_NOTIFICATION_MS: u64 = 2000;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("default tip percent must be non-negative, got {0}")]
    NegativeDefaultTip(i32),

    #[error("notification duration must be positive")]
    ZeroNotificationDuration,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Locale tag for currency formatting and strings, e.g. `"en-US"`.
    pub locale: String,
    /// Tip percentage the form starts with.
    pub default_tip_percent: i32,
    /// How long a validation toast stays on screen.
    pub notification_ms: u64,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Per-key template overrides.
    pub strings: BTreeMap<MessageKey, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            default_tip_percent: DEFAULT_TIP_PERCENT,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_level: "info".to_string(),
            strings: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Reads and validates settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tip_percent < 0 {
            return Err(ConfigError::NegativeDefaultTip(self.default_tip_percent));
        }
        if self.notification_ms == 0 {
            return Err(ConfigError::ZeroNotificationDuration);
        }
        StringCatalog::default().with_overrides(self.strings.clone())?;
        Ok(())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::for_locale(&self.locale)
    }

    /// String catalog for the configured locale with overrides applied.
    pub fn catalog(&self) -> Result<StringCatalog, ConfigError> {
        Ok(StringCatalog::for_locale(&self.locale).with_overrides(self.strings.clone())?)
    }
}
