//! # Trade History Pipeline
//!
//! The pure data-shaping passes behind the trade history view: filtering,
//! sorting, and pagination over a normalized `TradeRecord` collection.
//!
//! ## Architectural Principles
//!
//! - **Pure passes:** every stage is a function from one immutable
//!   collection to a new one. Nothing here mutates its input, holds state
//!   between invocations, or performs I/O, so re-running the pipeline on a
//!   criteria change is idempotent and safe from any number of callers.
//! - **Full-collection semantics:** filtering and sorting always run over
//!   the complete normalized collection. Only pagination narrows to a
//!   screenful, so metrics and CSV export see the whole filtered result.
//!
//! ## Public API
//!
//! - `FilterCriteria` / `filter_trades`: composable AND of predicates.
//! - `sort_trades`: stable ordering by one of the five `SortKey`s.
//! - `paginate` / `Page`: fixed-size slicing with a page count.

pub mod filter;
pub mod paginate;
pub mod sort;

// Re-export the key components to create a clean, public-facing API.
pub use filter::{FilterCriteria, filter_trades};
pub use paginate::{Page, paginate};
pub use sort::sort_trades;

use core_types::{SortKey, TradeRecord};

/// Runs filter and sort in one call, producing the full ordered collection
/// that the paginator, the metrics aggregator, and the CSV exporter all
/// consume.
pub fn select_trades(
    records: &[TradeRecord],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<TradeRecord> {
    let filtered = filter_trades(records, criteria);
    tracing::debug!(
        input = records.len(),
        matched = filtered.len(),
        ?sort_key,
        "trade selection pass"
    );
    sort_trades(filtered, sort_key)
}
