use chrono::NaiveDate;
use core_types::{TradeRecord, TradeType};
use serde::{Deserialize, Serialize};

/// The composable set of predicates a record must satisfy, combined with
/// logical AND. Every criterion is independently optional; the default
/// criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the instrument symbol.
    /// `None` or an empty string means no instrument filtering.
    pub instrument: Option<String>,

    /// Inclusive lower date bound, compared at the start of the day.
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper date bound, compared at the end of the day.
    pub date_to: Option<NaiveDate>,

    /// Win/loss class the record must fall into.
    pub trade_type: TradeType,
}

impl FilterCriteria {
    /// Whether a single record satisfies every active criterion.
    pub fn matches(&self, record: &TradeRecord) -> bool {
        if let Some(needle) = &self.instrument
            && !needle.is_empty()
            && !record
                .instrument
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            // A record without a usable date never matches an active bound.
            let Some(date) = record.trade_date else {
                return false;
            };
            // Dates are pure calendar days, so inclusive comparison at both
            // ends realizes the start-of-day / end-of-day boundary rule.
            if let Some(from) = self.date_from
                && date < from
            {
                return false;
            }
            if let Some(to) = self.date_to
                && date > to
            {
                return false;
            }
        }

        match self.trade_type {
            TradeType::All => true,
            TradeType::Winning => record.is_winning(),
            TradeType::Losing => record.is_losing(),
        }
    }
}

/// Applies the criteria over a collection, preserving input order.
/// The source collection is never mutated.
pub fn filter_trades(records: &[TradeRecord], criteria: &FilterCriteria) -> Vec<TradeRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
