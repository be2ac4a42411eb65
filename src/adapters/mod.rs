//! Concrete adapter implementations for ports.

pub mod csv_codec;
pub mod file_config_adapter;
pub mod json_codec;

use crate::domain::format::TradeFormat;
use crate::ports::trade_codec_port::TradeCodec;
use csv_codec::CsvCodec;
use json_codec::JsonCodec;

/// Codec for `format`. `pretty` only affects JSON output.
pub fn codec_for(format: TradeFormat, pretty: bool) -> Box<dyn TradeCodec> {
    match format {
        TradeFormat::Json => Box::new(JsonCodec::new(pretty)),
        TradeFormat::Csv => Box::new(CsvCodec),
    }
}
