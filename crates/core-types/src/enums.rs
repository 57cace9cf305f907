use serde::{Deserialize, Serialize};

/// The win/loss class a record must fall into to pass the filter.
///
/// Classification is by the sign of `profit_loss`: strictly positive is
/// winning, strictly negative is losing. A record whose profit/loss is
/// unavailable matches neither `Winning` nor `Losing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TradeType {
    #[default]
    All,
    Winning,
    Losing,
}

/// The five selectable orderings for the trade history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending by trade date; records without a date sort last.
    #[default]
    MostRecent,
    /// Ascending by trade date; records without a date sort first.
    OldestFirst,
    /// Descending by profit/loss; records without a value sort last.
    HighestProfit,
    /// Ascending by profit/loss; records without a value sort last.
    BiggestLoss,
    /// Case-insensitive ascending by instrument symbol.
    Alphabetical,
}
