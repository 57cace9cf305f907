//! # Journal Analytics
//!
//! Aggregate performance metrics over a trade collection: the numbers behind
//! the insights page and the live statistics panel.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** no knowledge of external systems; depends only on
//!   `core-types`.
//! - **Total calculation:** `summarize` is defined for every input,
//!   including empty or fully malformed collections. There is no error type
//!   in this crate; degraded fields were already tagged by the normalizer
//!   and are handled field-by-field here.
//!
//! ## Public API
//!
//! - `summarize`: the single-pass aggregation entry point.
//! - `JournalSummary`: the standardized struct holding the metrics.

pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::summarize;
pub use report::JournalSummary;
