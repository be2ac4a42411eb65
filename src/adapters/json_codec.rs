//! JSON array codec, the format the web front end consumes.

use crate::domain::error::TradebookError;
use crate::domain::trade_record::TradeRecord;
use crate::ports::trade_codec_port::TradeCodec;
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl TradeCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, trades: &[TradeRecord]) -> Result<String, TradebookError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(trades)
        } else {
            serde_json::to_string(trades)
        };
        let encoded = encoded.map_err(|e| TradebookError::Encode {
            format: self.name().to_string(),
            reason: e.to_string(),
        })?;
        debug!("encoded {} trade records as json", trades.len());
        Ok(encoded)
    }

    fn decode(&self, input: &str) -> Result<Vec<TradeRecord>, TradebookError> {
        let trades: Vec<TradeRecord> =
            serde_json::from_str(input).map_err(|e| TradebookError::Decode {
                format: self.name().to_string(),
                reason: e.to_string(),
            })?;
        debug!("decoded {} trade records from json", trades.len());
        Ok(trades)
    }
}
