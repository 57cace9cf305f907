use crate::report::JournalSummary;
use core_types::TradeRecord;
use rust_decimal::{Decimal, RoundingStrategy};

/// Computes the full `JournalSummary` for a collection in a single pass.
///
/// The collection is expected to be the *complete* filtered result, never a
/// paginated slice, so the summary reflects everything the current criteria
/// match.
///
/// Null-safety rules:
/// - a record with unavailable profit/loss contributes 0 to the sum and 1
///   to the count, and is never a best/worst candidate;
/// - best requires a strictly positive value, worst a strictly negative
///   one, so a journal of all losses has no best trade (and vice versa);
/// - ties resolve to the first record in input order.
pub fn summarize(records: &[TradeRecord]) -> JournalSummary {
    if records.is_empty() {
        return JournalSummary::empty();
    }

    let mut winning_trades = 0usize;
    let mut total_profit_loss = Decimal::ZERO;
    let mut best: Option<(Decimal, &TradeRecord)> = None;
    let mut worst: Option<(Decimal, &TradeRecord)> = None;

    for record in records {
        let Some(profit_loss) = record.profit_loss else {
            continue;
        };

        total_profit_loss += profit_loss;

        if profit_loss > Decimal::ZERO {
            winning_trades += 1;
            // Strict comparison keeps the first record on ties.
            if best.is_none_or(|(current, _)| profit_loss > current) {
                best = Some((profit_loss, record));
            }
        } else if profit_loss < Decimal::ZERO
            && worst.is_none_or(|(current, _)| profit_loss < current)
        {
            worst = Some((profit_loss, record));
        }
    }

    let total = Decimal::from(records.len());
    JournalSummary {
        total_trades: records.len(),
        win_rate_pct: round_pct(Decimal::from(winning_trades) * Decimal::from(100) / total),
        avg_profit_loss: round_pct(total_profit_loss / total),
        best_trade: best.map(|(_, record)| record.clone()),
        worst_trade: worst.map(|(_, record)| record.clone()),
    }
}

/// Two-decimal rounding, half away from zero, rescaled so `Display` always
/// shows exactly two places ("0.00", "66.67").
fn round_pct(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
