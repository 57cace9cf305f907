use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged trade in its canonical, post-normalization shape.
///
/// Every optional field uses `None` as the explicit "unavailable" marker:
/// the source value was missing or unparseable. Downstream components match
/// on the `Option` rather than assuming presence, so no field access on a
/// `TradeRecord` can fail at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Opaque unique identifier assigned by the record store.
    /// `None` only for input that has not been persisted yet.
    pub id: Option<String>,

    /// Free-text symbol (e.g. "NAS100", "EUR/USD"). Empty when the source
    /// field was missing. Matched case-insensitively everywhere.
    pub instrument: String,

    pub entry_price: Option<Decimal>,
    pub exit_price: Option<Decimal>,

    /// Calendar date of the trade. Day-boundary semantics only.
    pub trade_date: Option<NaiveDate>,

    /// Signed result of the trade. The sign, not a separate flag, determines
    /// win/loss classification.
    pub profit_loss: Option<Decimal>,

    pub notes: String,
}

impl TradeRecord {
    /// True when `profit_loss` is present and strictly positive.
    pub fn is_winning(&self) -> bool {
        matches!(self.profit_loss, Some(pl) if pl > Decimal::ZERO)
    }

    /// True when `profit_loss` is present and strictly negative.
    pub fn is_losing(&self) -> bool {
        matches!(self.profit_loss, Some(pl) if pl < Decimal::ZERO)
    }

    /// Whether this record's instrument follows the foreign-exchange
    /// formatting convention (5 decimal places instead of 2).
    pub fn is_forex_like(&self) -> bool {
        crate::instrument::is_forex_like(&self.instrument)
    }
}
