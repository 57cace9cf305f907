//! Instrument classification and price formatting.
//!
//! Classification is a pure function of the symbol text. It feeds numeric
//! precision (5 decimal places for forex-like instruments, 2 for everything
//! else) and must stay consistent between on-screen tables and CSV export,
//! which is why it lives in this shared layer.

use rust_decimal::{Decimal, RoundingStrategy};

/// Well-known forex pairs written without a "/" separator.
///
/// Symbols containing a "/" are classified by the separator alone; this set
/// only catches the compact spelling. There is deliberately no exclusion
/// list: "XAU/USD" and "BTC/USD" are forex-like by the separator rule.
const FOREX_ALIASES: &[&str] = &[
    "EURUSD", "GBPUSD", "USDJPY", "USDCHF", "AUDUSD", "USDCAD", "NZDUSD", "EURGBP", "EURJPY",
    "GBPJPY", "XAUUSD", "XAGUSD",
];

/// Decides whether a symbol follows the foreign-exchange quoting convention.
pub fn is_forex_like(symbol: &str) -> bool {
    if symbol.contains('/') {
        return true;
    }
    let upper = symbol.trim().to_uppercase();
    FOREX_ALIASES.contains(&upper.as_str())
}

/// Number of decimal places a price on this instrument is rendered with.
pub fn price_decimals(symbol: &str) -> u32 {
    if is_forex_like(symbol) { 5 } else { 2 }
}

/// Formats a price at the precision implied by `forex`, always padding to
/// the full number of decimal places ("18000.50", "1.23456").
///
/// Rounding is half-away-from-zero, matching how the journal has always
/// displayed prices.
pub fn format_price(value: Decimal, forex: bool) -> String {
    let decimals = if forex { 5 } else { 2 };
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    rounded.to_string()
}
