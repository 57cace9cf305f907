pub mod enums;
pub mod instrument;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{SortKey, TradeType};
pub use instrument::{format_price, is_forex_like, price_decimals};
pub use structs::TradeRecord;
