//! Domain error types.

/// Top-level error type for tradebook.
#[derive(Debug, thiserror::Error)]
pub enum TradebookError {
    #[error("invalid trade record field {field} = {value:?}: {reason}")]
    InvalidTradeRecord {
        field: String,
        value: String,
        reason: String,
    },

    #[error("failed to decode {format} trades: {reason}")]
    Decode { format: String, reason: String },

    #[error("failed to encode {format} trades: {reason}")]
    Encode { format: String, reason: String },

    #[error("unknown trade format {name:?} (expected json or csv)")]
    UnknownFormat { name: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TradebookError {
    pub fn invalid_record(field: &str, value: impl ToString, reason: &str) -> Self {
        TradebookError::InvalidTradeRecord {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Process exit status for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            TradebookError::Io(_) => 1,
            TradebookError::ConfigParse { .. }
            | TradebookError::ConfigInvalid { .. } => 2,
            TradebookError::Decode { .. }
            | TradebookError::Encode { .. }
            | TradebookError::UnknownFormat { .. } => 3,
            TradebookError::InvalidTradeRecord { .. } => 4,
        }
    }
}

impl From<&TradebookError> for std::process::ExitCode {
    fn from(err: &TradebookError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}
