#![allow(dead_code)]

use std::io::Write;
use tradebook::domain::trade_record::TradeRecord;

pub fn sample_trades() -> Vec<TradeRecord> {
    vec![
        TradeRecord::parse("2023-01-02", "2023-01-10", 100.0, 110.0, 0.10).unwrap(),
        TradeRecord::parse("2023-02-01", "2023-03-15", 3920.12, 3850.55, -0.0177).unwrap(),
        TradeRecord::parse("2023-06-30", "2023-06-30", 11323.77, 11323.77, 0.0).unwrap(),
    ]
}

pub const SAMPLE_JSON: &str = r#"[
  {"buyDate": "2023-01-02", "sellDate": "2023-01-10", "buyClosePoint": 100.0, "sellClosePoint": 110.0, "profitLossRatio": 0.1},
  {"buyDate": "2023-02-01", "sellDate": "2023-03-15", "buyClosePoint": 3920.12, "sellClosePoint": 3850.55, "profitLossRatio": -0.0177},
  {"buyDate": "2023-06-30", "sellDate": "2023-06-30", "buyClosePoint": 11323.77, "sellClosePoint": 11323.77, "profitLossRatio": 0.0}
]"#;

pub const INVERTED_JSON: &str = r#"[
  {"buyDate": "2023-05-01", "sellDate": "2023-04-01", "buyClosePoint": 100.0, "sellClosePoint": 90.0, "profitLossRatio": -0.1}
]"#;

/// Temp file with the given suffix so format inference sees the extension.
pub fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
