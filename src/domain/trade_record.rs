//! Completed trade record: when a position was opened and closed, at which
//! close points, and the realized profit/loss ratio.
//!
//! The ratio is supplied by whoever produced the trade. Nothing here derives
//! it from the close points.

use crate::domain::error::TradebookError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual format of `buyDate` and `sellDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of trade history.
///
/// Fields are private so every value has passed [`TradeRecord::new`]:
/// the sell date never precedes the buy date and all three numbers are finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireTradeRecord", into = "WireTradeRecord")]
pub struct TradeRecord {
    buy_date: NaiveDate,
    sell_date: NaiveDate,
    buy_close_point: f64,
    sell_close_point: f64,
    profit_loss_ratio: f64,
}

impl TradeRecord {
    pub fn new(
        buy_date: NaiveDate,
        sell_date: NaiveDate,
        buy_close_point: f64,
        sell_close_point: f64,
        profit_loss_ratio: f64,
    ) -> Result<Self, TradebookError> {
        if sell_date < buy_date {
            return Err(TradebookError::invalid_record(
                "sellDate",
                sell_date.format(DATE_FORMAT),
                &format!("precedes buyDate {}", buy_date.format(DATE_FORMAT)),
            ));
        }
        ensure_finite("buyClosePoint", buy_close_point)?;
        ensure_finite("sellClosePoint", sell_close_point)?;
        ensure_finite("profitLossRatio", profit_loss_ratio)?;

        Ok(Self {
            buy_date,
            sell_date,
            buy_close_point,
            sell_close_point,
            profit_loss_ratio,
        })
    }

    /// Build a record from `YYYY-MM-DD` date strings.
    pub fn parse(
        buy_date: &str,
        sell_date: &str,
        buy_close_point: f64,
        sell_close_point: f64,
        profit_loss_ratio: f64,
    ) -> Result<Self, TradebookError> {
        let buy_date = parse_date("buyDate", buy_date)?;
        let sell_date = parse_date("sellDate", sell_date)?;
        Self::new(
            buy_date,
            sell_date,
            buy_close_point,
            sell_close_point,
            profit_loss_ratio,
        )
    }

    pub fn buy_date(&self) -> NaiveDate {
        self.buy_date
    }

    pub fn sell_date(&self) -> NaiveDate {
        self.sell_date
    }

    pub fn buy_close_point(&self) -> f64 {
        self.buy_close_point
    }

    pub fn sell_close_point(&self) -> f64 {
        self.sell_close_point
    }

    pub fn profit_loss_ratio(&self) -> f64 {
        self.profit_loss_ratio
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {} -> {} ({})",
            self.buy_date.format(DATE_FORMAT),
            self.sell_date.format(DATE_FORMAT),
            self.buy_close_point,
            self.sell_close_point,
            self.profit_loss_ratio
        )
    }
}

/// Only the canonical zero-padded form is accepted, so decoding then
/// encoding reproduces the input text.
fn parse_date(field: &str, value: &str) -> Result<NaiveDate, TradebookError> {
    let invalid =
        || TradebookError::invalid_record(field, value, "invalid date format, expected YYYY-MM-DD");
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid());
    }
    Ok(date)
}

fn ensure_finite(field: &str, value: f64) -> Result<(), TradebookError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TradebookError::invalid_record(field, value, "must be a finite number"))
    }
}

/// Serialized shape shared by the JSON and CSV codecs.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTradeRecord {
    buy_date: String,
    sell_date: String,
    buy_close_point: f64,
    sell_close_point: f64,
    profit_loss_ratio: f64,
}

impl TryFrom<WireTradeRecord> for TradeRecord {
    type Error = TradebookError;

    fn try_from(wire: WireTradeRecord) -> Result<Self, Self::Error> {
        TradeRecord::parse(
            &wire.buy_date,
            &wire.sell_date,
            wire.buy_close_point,
            wire.sell_close_point,
            wire.profit_loss_ratio,
        )
    }
}

impl From<TradeRecord> for WireTradeRecord {
    fn from(trade: TradeRecord) -> Self {
        Self {
            buy_date: trade.buy_date.format(DATE_FORMAT).to_string(),
            sell_date: trade.sell_date.format(DATE_FORMAT).to_string(),
            buy_close_point: trade.buy_close_point,
            sell_close_point: trade.sell_close_point,
            profit_loss_ratio: trade.profit_loss_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_trade() -> TradeRecord {
        TradeRecord::parse("2023-01-02", "2023-01-10", 100.0, 110.0, 0.10).unwrap()
    }

    #[test]
    fn accessors_return_supplied_values() {
        let trade = sample_trade();
        assert_eq!(trade.buy_date(), date(2023, 1, 2));
        assert_eq!(trade.sell_date(), date(2023, 1, 10));
        assert_eq!(trade.buy_close_point(), 100.0);
        assert_eq!(trade.sell_close_point(), 110.0);
        assert_eq!(trade.profit_loss_ratio(), 0.10);
    }

    #[test]
    fn new_and_parse_agree() {
        let typed = TradeRecord::new(date(2023, 1, 2), date(2023, 1, 10), 100.0, 110.0, 0.10)
            .unwrap();
        assert_eq!(typed, sample_trade());
    }

    #[test]
    fn equal_fields_compare_equal() {
        assert_eq!(sample_trade(), sample_trade());
        assert_eq!(sample_trade(), sample_trade().clone());
    }

    #[test]
    fn any_differing_field_compares_unequal() {
        let base = sample_trade();
        let variants = [
            TradeRecord::parse("2023-01-03", "2023-01-10", 100.0, 110.0, 0.10),
            TradeRecord::parse("2023-01-02", "2023-01-11", 100.0, 110.0, 0.10),
            TradeRecord::parse("2023-01-02", "2023-01-10", 100.5, 110.0, 0.10),
            TradeRecord::parse("2023-01-02", "2023-01-10", 100.0, 109.0, 0.10),
            TradeRecord::parse("2023-01-02", "2023-01-10", 100.0, 110.0, 0.09),
        ];
        for variant in variants {
            assert_ne!(base, variant.unwrap());
        }
    }

    #[test]
    fn ratio_is_not_derived_from_close_points() {
        let trade = TradeRecord::parse("2023-01-02", "2023-01-10", 100.0, 110.0, -3.5).unwrap();
        assert_eq!(trade.profit_loss_ratio(), -3.5);
    }

    #[test]
    fn same_day_trade_is_accepted() {
        let trade = TradeRecord::parse("2023-03-15", "2023-03-15", 10.0, 9.0, -0.1).unwrap();
        assert_eq!(trade.buy_date(), trade.sell_date());
    }

    #[test]
    fn sell_before_buy_is_rejected() {
        let err = TradeRecord::parse("2023-05-01", "2023-04-01", 100.0, 90.0, -0.1).unwrap_err();
        match err {
            TradebookError::InvalidTradeRecord { field, value, .. } => {
                assert_eq!(field, "sellDate");
                assert_eq!(value, "2023-04-01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for (buy, sell, bad_field) in [
            ("2023/01/02", "2023-01-10", "buyDate"),
            ("2023-01-02", "next week", "sellDate"),
            ("2023-02-30", "2023-03-01", "buyDate"),
            ("", "2023-03-01", "buyDate"),
            ("2023-1-2", "2023-12-31", "buyDate"),
            ("2023-01-2", "2023-12-31", "buyDate"),
            (" 2023-01-02", "2023-12-31", "buyDate"),
            ("+2023-01-02", "2023-12-31", "buyDate"),
            ("2023-01-02", "2023-12-31 ", "sellDate"),
        ] {
            let err = TradeRecord::parse(buy, sell, 1.0, 1.0, 0.0).unwrap_err();
            assert!(
                matches!(&err, TradebookError::InvalidTradeRecord { field, .. } if field == bad_field),
                "{buy} / {sell}: {err}"
            );
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let d = date(2023, 1, 2);
        let cases = [
            (f64::NAN, 1.0, 0.0, "buyClosePoint"),
            (1.0, f64::INFINITY, 0.0, "sellClosePoint"),
            (1.0, 1.0, f64::NEG_INFINITY, "profitLossRatio"),
        ];
        for (buy, sell, ratio, bad_field) in cases {
            let err = TradeRecord::new(d, d, buy, sell, ratio).unwrap_err();
            assert!(
                matches!(&err, TradebookError::InvalidTradeRecord { field, .. } if field == bad_field)
            );
        }
    }

    #[test]
    fn negative_close_points_are_accepted() {
        let trade = TradeRecord::parse("2020-04-17", "2020-04-20", 18.27, -37.63, -3.06).unwrap();
        assert_eq!(trade.sell_close_point(), -37.63);
    }

    #[test]
    fn display_shows_dates_and_points() {
        assert_eq!(
            sample_trade().to_string(),
            "2023-01-02 -> 2023-01-10: 100 -> 110 (0.1)"
        );
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let value = serde_json::to_value(sample_trade()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "buyDate": "2023-01-02",
                "sellDate": "2023-01-10",
                "buyClosePoint": 100.0,
                "sellClosePoint": 110.0,
                "profitLossRatio": 0.1
            })
        );
    }

    #[test]
    fn deserializing_validates() {
        let json = r#"{"buyDate":"2023-05-01","sellDate":"2023-04-01",
            "buyClosePoint":1.0,"sellClosePoint":1.0,"profitLossRatio":0.0}"#;
        let err = serde_json::from_str::<TradeRecord>(json).unwrap_err();
        assert!(err.to_string().contains("sellDate"));
    }

    #[test]
    fn deserializing_requires_every_field() {
        let json = r#"{"buyDate":"2023-01-02","sellDate":"2023-01-10",
            "buyClosePoint":1.0,"sellClosePoint":1.0}"#;
        let err = serde_json::from_str::<TradeRecord>(json).unwrap_err();
        assert!(err.to_string().contains("profitLossRatio"));
    }
}
