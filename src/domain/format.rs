//! Supported trade history encodings.

use crate::domain::error::TradebookError;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Parsed by clap on the command line and by [`FromStr`] from config files.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeFormat {
    Json,
    Csv,
}

impl TradeFormat {
    /// Infer the format from a file extension, if it is one we know.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeFormat::Json => "json",
            TradeFormat::Csv => "csv",
        }
    }
}

impl FromStr for TradeFormat {
    type Err = TradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TradeFormat::Json),
            "csv" => Ok(TradeFormat::Csv),
            _ => Err(TradebookError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TradeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
