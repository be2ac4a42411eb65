//! Text encoding port for batches of trade records.

use crate::domain::error::TradebookError;
use crate::domain::trade_record::TradeRecord;

/// Encodes and decodes trade history documents.
///
/// Record order is preserved both ways. Decoding is all-or-nothing: one bad
/// row fails the whole document.
pub trait TradeCodec {
    /// Short format name, also used as the file extension.
    fn name(&self) -> &'static str;

    fn encode(&self, trades: &[TradeRecord]) -> Result<String, TradebookError>;

    fn decode(&self, input: &str) -> Result<Vec<TradeRecord>, TradebookError>;
}
