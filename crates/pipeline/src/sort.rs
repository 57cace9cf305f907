use chrono::NaiveDate;
use core_types::{SortKey, TradeRecord};
use rust_decimal::Decimal;
use std::cmp::Reverse;

/// Orders a collection by the selected key.
///
/// Every ordering is stable: records comparing equal keep their relative
/// pre-sort order. Equal dates and equal profit/loss values are common in
/// small journals, and the view must not reorder them between renders.
pub fn sort_trades(mut records: Vec<TradeRecord>, key: SortKey) -> Vec<TradeRecord> {
    match key {
        SortKey::MostRecent => records.sort_by_key(|r| Reverse(date_or_epoch(r))),
        SortKey::OldestFirst => records.sort_by_key(date_or_epoch),
        SortKey::HighestProfit => records.sort_by_key(|r| Reverse(profit_or_min(r))),
        SortKey::BiggestLoss => records.sort_by_key(profit_or_max),
        SortKey::Alphabetical => records.sort_by_key(|r| r.instrument.to_lowercase()),
    }
    records
}

/// Unavailable dates act as the epoch origin: oldest possible, so they land
/// last under `MostRecent` and first under `OldestFirst`.
fn date_or_epoch(record: &TradeRecord) -> NaiveDate {
    record.trade_date.unwrap_or_default()
}

/// Unavailable profit/loss acts as negative infinity under `HighestProfit`.
fn profit_or_min(record: &TradeRecord) -> Decimal {
    record.profit_loss.unwrap_or(Decimal::MIN)
}

/// Unavailable profit/loss acts as positive infinity under `BiggestLoss`.
fn profit_or_max(record: &TradeRecord) -> Decimal {
    record.profit_loss.unwrap_or(Decimal::MAX)
}
