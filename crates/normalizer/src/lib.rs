//! # Trade Record Normalizer
//!
//! The boundary between the record store's loosely-shaped JSON and the
//! canonical `TradeRecord` the rest of the system consumes.
//!
//! The store has historically returned numbers as numbers or as numeric
//! strings, dates as plain `YYYY-MM-DD` or full ISO datetimes, and has used
//! both snake_case and camelCase field names. Records can also be missing
//! fields entirely. This crate absorbs all of that: normalization is total,
//! never returns an error, and degrades each unusable field to its
//! "unavailable" marker (`None`, or the empty string for text) instead.

use chrono::NaiveDate;
use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Coerces one raw record of unknown shape into a canonical `TradeRecord`.
///
/// Any non-object value produces a fully-degraded record rather than an
/// error; downstream components treat its fields as unavailable.
pub fn normalize(raw: &Value) -> TradeRecord {
    TradeRecord {
        id: string_field(raw, &["_id", "id"]),
        instrument: string_field(raw, &["instrument"]).unwrap_or_default(),
        entry_price: decimal_field(raw, &["entry_price", "entryPrice"]),
        exit_price: decimal_field(raw, &["exit_price", "exitPrice"]),
        trade_date: date_field(raw, &["trade_date", "tradeDate"]),
        profit_loss: decimal_field(raw, &["profit_loss", "profitLoss"]),
        notes: string_field(raw, &["notes"]).unwrap_or_default(),
    }
}

/// Normalizes a whole collection in input order.
pub fn normalize_all(raw: &[Value]) -> Vec<TradeRecord> {
    raw.iter().map(normalize).collect()
}

/// Looks a field up under any of its historical names.
fn field<'a>(raw: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| raw.get(name))
}

fn string_field(raw: &Value, names: &[&str]) -> Option<String> {
    match field(raw, names)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => {
            tracing::debug!(field = names[0], value = ?other, "non-text value degraded to unavailable");
            None
        }
    }
}

fn decimal_field(raw: &Value, names: &[&str]) -> Option<Decimal> {
    let value = field(raw, names)?;
    let parsed = match value {
        // serde_json renders numbers exactly, so parsing the textual form
        // keeps full precision instead of routing through f64.
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    if parsed.is_none() {
        tracing::debug!(field = names[0], value = ?value, "unparseable number degraded to unavailable");
    }
    parsed
}

fn date_field(raw: &Value, names: &[&str]) -> Option<NaiveDate> {
    let value = field(raw, names)?;
    let parsed = match value {
        Value::String(s) => parse_date(s),
        _ => None,
    };
    if parsed.is_none() {
        tracing::debug!(field = names[0], value = ?value, "unparseable date degraded to unavailable");
    }
    parsed
}

/// Accepts `YYYY-MM-DD`, or an ISO datetime whose first ten characters are
/// the calendar date. The time component is dropped: trade dates carry
/// day-boundary semantics only, so no timezone shift is applied.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    let prefix = trimmed.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
