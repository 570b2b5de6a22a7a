//! Command line options.
//!
//! Flags override the matching settings from the config file.

use std::path::PathBuf;

use clap::Parser;
use tip_core::{AppConfig, ConfigError};

/// Tip calculator: enter a bill amount and a percentage, get the tip.
#[derive(Debug, Parser)]
#[command(name = "TipTime", version)]
pub struct Cli {
    /// Settings file (TOML). Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Locale tag for currency and strings, e.g. `en-US`, `de-DE`.
    #[arg(long)]
    pub locale: Option<String>,

    /// Tip percentage the form starts with.
    #[arg(long)]
    pub tip: Option<i32>,

    /// Log filter directive, e.g. `debug` or `info,tip_core=trace`.
    /// `RUST_LOG` still takes precedence.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not echo log records to stdout.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies the flag overrides.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(tip) = self.tip {
            config.default_tip_percent = tip;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
