use core_types::TradeRecord;
use serde::{Deserialize, Serialize};

/// One screenful of an ordered collection, plus how many screens exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<TradeRecord>,
    /// `ceil(total / page_size)`, never less than 1: an empty collection
    /// still has one (empty) page.
    pub page_count: usize,
}

/// Slices an ordered collection into fixed-size pages.
///
/// This is a pure slice: `page_number` is 1-based and is *not* clamped here.
/// An out-of-range page yields empty `items`, and the caller is responsible
/// for clamping into `[1, page_count]` before asking.
pub fn paginate(records: &[TradeRecord], page_size: usize, page_number: usize) -> Page {
    let page_size = page_size.max(1);
    let page_count = records.len().div_ceil(page_size).max(1);

    let items = match page_number.checked_sub(1) {
        Some(page_index) => records
            .iter()
            .skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        // Page 0 is out of range below the first page.
        None => Vec::new(),
    };

    Page { items, page_count }
}
