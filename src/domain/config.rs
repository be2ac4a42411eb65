//! Typed tradebook configuration, built and validated from a [`ConfigPort`].

use crate::domain::error::TradebookError;
use crate::domain::format::TradeFormat;
use crate::ports::config_port::ConfigPort;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct TradebookConfig {
    /// Output encoding when the output path has no known extension.
    pub output_format: TradeFormat,
    pub pretty: bool,
    pub log_level: LevelFilter,
}

impl Default for TradebookConfig {
    fn default() -> Self {
        Self {
            output_format: TradeFormat::Json,
            pretty: true,
            log_level: LevelFilter::Warn,
        }
    }
}

impl TradebookConfig {
    pub fn from_port(config: &dyn ConfigPort) -> Result<Self, TradebookError> {
        let defaults = Self::default();

        let output_format = match config.get_string("output", "format") {
            Some(name) => name.parse().map_err(|_| TradebookError::ConfigInvalid {
                section: "output".to_string(),
                key: "format".to_string(),
                reason: format!("unknown format {name:?}, expected json or csv"),
            })?,
            None => defaults.output_format,
        };

        let log_level = match config.get_string("logging", "level") {
            Some(level) => level.trim().parse().map_err(|_| TradebookError::ConfigInvalid {
                section: "logging".to_string(),
                key: "level".to_string(),
                reason: format!("unknown level {level:?}"),
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            output_format,
            pretty: config.get_bool("output", "pretty", defaults.pretty),
            log_level,
        })
    }
}
