//! # CSV Export
//!
//! Serializes a trade collection to the downloadable `trade_history.csv`
//! text body.
//!
//! The format is the journal's historical one, not RFC 4180: instrument and
//! notes are wrapped in literal double quotes with no internal escaping
//! beyond literal inclusion (embedded commas stay inside the quoted value),
//! prices use the instrument classifier's precision, and unavailable fields
//! serialize as the empty string. The `csv` crate is deliberately not used
//! because it would double embedded quotes and change the historical output.

use core_types::{TradeRecord, format_price};

/// File name the export is delivered under.
pub const EXPORT_FILE_NAME: &str = "trade_history.csv";

/// MIME type of the export payload.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Fixed header row.
const HEADER: &str = "Instrument,Entry Price,Exit Price,Date,Profit/Loss,Notes";

/// Serializes a collection in its current order — the caller passes the
/// already filtered and sorted collection, never a paginated slice.
///
/// Rows are joined by `\n` with no trailing newline.
pub fn to_csv(records: &[TradeRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(records.iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(record: &TradeRecord) -> String {
    let forex = record.is_forex_like();
    [
        format!("\"{}\"", record.instrument),
        price_cell(record.entry_price, forex),
        price_cell(record.exit_price, forex),
        record
            .trade_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        // Raw stored value, no forced rounding.
        record
            .profit_loss
            .map(|pl| pl.to_string())
            .unwrap_or_default(),
        format!("\"{}\"", record.notes),
    ]
    .join(",")
}

fn price_cell(price: Option<rust_decimal::Decimal>, forex: bool) -> String {
    price
        .map(|value| format_price(value, forex))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(
        instrument: &str,
        entry: Option<&str>,
        exit: Option<&str>,
        date: Option<(i32, u32, u32)>,
        pl: Option<&str>,
        notes: &str,
    ) -> TradeRecord {
        TradeRecord {
            id: Some("id".to_string()),
            instrument: instrument.to_string(),
            entry_price: entry.map(|v| Decimal::from_str(v).unwrap()),
            exit_price: exit.map(|v| Decimal::from_str(v).unwrap()),
            trade_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            profit_loss: pl.map(|v| Decimal::from_str(v).unwrap()),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn empty_collection_exports_header_only() {
        assert_eq!(
            to_csv(&[]),
            "Instrument,Entry Price,Exit Price,Date,Profit/Loss,Notes"
        );
    }

    #[test]
    fn forex_prices_export_at_five_decimals() {
        let records = vec![record(
            "EUR/USD",
            Some("1.23456"),
            Some("1.235"),
            Some((2025, 3, 14)),
            Some("50"),
            "breakout",
        )];
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"EUR/USD\",1.23456,1.23500,2025-03-14,50,\"breakout\"");
    }

    #[test]
    fn non_forex_prices_export_at_two_decimals() {
        let records = vec![record(
            "NAS100",
            Some("18000.5"),
            Some("18020"),
            Some((2025, 3, 14)),
            Some("-20.5"),
            "",
        )];
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"NAS100\",18000.50,18020.00,2025-03-14,-20.5,\"\"");
    }

    #[test]
    fn unavailable_fields_export_as_empty_cells() {
        let records = vec![record("NAS100", None, None, None, None, "")];
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"NAS100\",,,,,\"\"");
    }

    #[test]
    fn embedded_commas_stay_inside_quoted_fields() {
        let records = vec![record(
            "EUR/USD",
            None,
            None,
            None,
            None,
            "scaled in, then out",
        )];
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"EUR/USD\",,,,,\"scaled in, then out\"");
    }

    #[test]
    fn rows_follow_collection_order_with_no_trailing_newline() {
        let records = vec![
            record("A", None, None, None, Some("1"), ""),
            record("B", None, None, None, Some("2"), ""),
        ];
        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"A\""));
        assert!(lines[2].starts_with("\"B\""));
        assert!(!csv.ends_with('\n'));
    }
}
