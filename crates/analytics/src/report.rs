use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standardized summary of a trade collection's performance.
///
/// This struct is the output of `summarize` and backs both the insights view
/// (whole journal) and the live statistics panel (filtered view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalSummary {
    /// Count of input records, malformed ones included.
    pub total_trades: usize,

    /// Percentage of records with strictly positive profit/loss, rounded to
    /// two decimal places. Always scale 2, so it displays as "66.67".
    pub win_rate_pct: Decimal,

    /// Mean profit/loss per record, two decimal places. Records with an
    /// unavailable profit/loss contribute 0 to the sum but still count.
    pub avg_profit_loss: Decimal,

    /// The first record with the maximum strictly-positive profit/loss.
    /// `None` when no winning trade exists; never a synthetic zero record.
    pub best_trade: Option<TradeRecord>,

    /// The first record with the minimum strictly-negative profit/loss.
    /// `None` when no losing trade exists.
    pub worst_trade: Option<TradeRecord>,
}

impl JournalSummary {
    /// The summary of an empty collection: zero counts, "0.00" rates, and
    /// no best/worst candidates.
    pub fn empty() -> Self {
        let zero = Decimal::new(0, 2);
        Self {
            total_trades: 0,
            win_rate_pct: zero,
            avg_profit_loss: zero,
            best_trade: None,
            worst_trade: None,
        }
    }
}

impl Default for JournalSummary {
    fn default() -> Self {
        Self::empty()
    }
}
