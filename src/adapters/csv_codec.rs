//! CSV codec: one header row with the wire field names, one row per trade.

use crate::domain::error::TradebookError;
use crate::domain::trade_record::TradeRecord;
use crate::ports::trade_codec_port::TradeCodec;
use log::debug;

pub const CSV_HEADERS: [&str; 5] = [
    "buyDate",
    "sellDate",
    "buyClosePoint",
    "sellClosePoint",
    "profitLossRatio",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

impl CsvCodec {
    fn encode_error(&self, e: impl ToString) -> TradebookError {
        TradebookError::Encode {
            format: self.name().to_string(),
            reason: e.to_string(),
        }
    }
}

impl TradeCodec for CsvCodec {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, trades: &[TradeRecord]) -> Result<String, TradebookError> {
        // Headers are written by hand so an empty history still has them.
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(CSV_HEADERS)
            .map_err(|e| self.encode_error(e))?;
        for trade in trades {
            wtr.serialize(trade).map_err(|e| self.encode_error(e))?;
        }
        let bytes = wtr.into_inner().map_err(|e| self.encode_error(e))?;
        let encoded = String::from_utf8(bytes).map_err(|e| self.encode_error(e))?;
        debug!("encoded {} trade records as csv", trades.len());
        Ok(encoded)
    }

    fn decode(&self, input: &str) -> Result<Vec<TradeRecord>, TradebookError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let trades = rdr
            .deserialize::<TradeRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TradebookError::Decode {
                format: self.name().to_string(),
                reason: e.to_string(),
            })?;
        debug!("decoded {} trade records from csv", trades.len());
        Ok(trades)
    }
}
