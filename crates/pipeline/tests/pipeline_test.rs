//! Integration tests for the trade history pipeline.
//!
//! Covers the cross-stage properties:
//! 1. Filter + sort composition over a realistic mixed journal
//! 2. Pagination round-trip: concatenated pages reconstruct the collection
//! 3. Filter idempotence: applying criteria twice equals applying once
//! 4. Stability of sorting across the whole pipeline

use chrono::NaiveDate;
use core_types::{SortKey, TradeRecord, TradeType};
use pipeline::{FilterCriteria, filter_trades, paginate, select_trades, sort_trades};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Helper: build a record with the fields the pipeline cares about.
fn record(id: &str, instrument: &str, date: Option<(i32, u32, u32)>, pl: Option<i64>) -> TradeRecord {
    TradeRecord {
        id: Some(id.to_string()),
        instrument: instrument.to_string(),
        entry_price: None,
        exit_price: None,
        trade_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        profit_loss: pl.map(Decimal::from),
        notes: String::new(),
    }
}

/// The reference journal from the metrics documentation.
fn reference_journal() -> Vec<TradeRecord> {
    vec![
        record("t1", "EUR/USD", Some((2025, 1, 10)), Some(50)),
        record("t2", "NAS100", Some((2025, 1, 12)), Some(-20)),
        record("t3", "XAU/USD", Some((2025, 1, 11)), Some(100)),
    ]
}

#[test]
fn losing_filter_matches_exactly_the_negative_record() {
    let criteria = FilterCriteria {
        trade_type: TradeType::Losing,
        ..FilterCriteria::default()
    };
    let result = filter_trades(&reference_journal(), &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].instrument, "NAS100");
}

#[test]
fn highest_profit_orders_the_reference_journal() {
    let sorted = sort_trades(reference_journal(), SortKey::HighestProfit);
    let symbols: Vec<&str> = sorted.iter().map(|r| r.instrument.as_str()).collect();
    assert_eq!(symbols, vec!["XAU/USD", "EUR/USD", "NAS100"]);
}

#[test]
fn select_composes_filter_then_sort() {
    let mut journal = reference_journal();
    journal.push(record("t4", "EUR/GBP", Some((2025, 1, 9)), Some(75)));

    let criteria = FilterCriteria {
        trade_type: TradeType::Winning,
        ..FilterCriteria::default()
    };
    let selected = select_trades(&journal, &criteria, SortKey::HighestProfit);
    let symbols: Vec<&str> = selected.iter().map(|r| r.instrument.as_str()).collect();
    assert_eq!(symbols, vec!["XAU/USD", "EUR/GBP", "EUR/USD"]);
}

#[test]
fn filtering_and_sorting_leave_the_source_untouched() {
    let journal = reference_journal();
    let criteria = FilterCriteria {
        trade_type: TradeType::Winning,
        ..FilterCriteria::default()
    };
    let _ = select_trades(&journal, &criteria, SortKey::BiggestLoss);
    assert_eq!(journal, reference_journal());
}

#[test]
fn equal_sort_keys_keep_filter_output_order() {
    // Same date and same profit/loss; only ids differ.
    let journal = vec![
        record("a", "EUR/USD", Some((2025, 1, 10)), Some(50)),
        record("b", "EUR/USD", Some((2025, 1, 10)), Some(50)),
        record("c", "EUR/USD", Some((2025, 1, 10)), Some(50)),
    ];
    for key in [
        SortKey::MostRecent,
        SortKey::OldestFirst,
        SortKey::HighestProfit,
        SortKey::BiggestLoss,
        SortKey::Alphabetical,
    ] {
        let selected = select_trades(&journal, &FilterCriteria::default(), key);
        let ids: Vec<&str> = selected.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"], "key {key:?}");
    }
}

/// Strategy: a journal of up to 60 records with optionally-missing dates and
/// profit/loss values, across a handful of instruments.
fn journal_strategy() -> impl Strategy<Value = Vec<TradeRecord>> {
    let instrument = prop_oneof![
        Just("EUR/USD"),
        Just("NAS100"),
        Just("XAU/USD"),
        Just("AAPL"),
        Just(""),
    ];
    let one = (instrument, proptest::option::of(0u32..365), proptest::option::of(-500i64..500));
    prop::collection::vec(one, 0..60).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (instrument, day_offset, pl))| TradeRecord {
                id: Some(format!("t{i}")),
                instrument: instrument.to_string(),
                entry_price: None,
                exit_price: None,
                trade_date: day_offset.map(|offset| {
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
                        + chrono::Duration::days(offset as i64)
                }),
                profit_loss: pl.map(Decimal::from),
                notes: String::new(),
            })
            .collect()
    })
}

proptest! {
    /// Concatenating every page in page order reconstructs the sorted and
    /// filtered collection exactly, with no duplication or omission.
    #[test]
    fn pagination_round_trips(journal in journal_strategy(), page_size in 1usize..12) {
        let selected = select_trades(&journal, &FilterCriteria::default(), SortKey::MostRecent);

        let page_count = paginate(&selected, page_size, 1).page_count;
        let mut reassembled = Vec::new();
        for page_number in 1..=page_count {
            let page = paginate(&selected, page_size, page_number);
            prop_assert_eq!(page.page_count, page_count);
            reassembled.extend(page.items);
        }
        prop_assert_eq!(reassembled, selected);
    }

    /// Applying the same criteria twice yields the same result as once.
    #[test]
    fn filtering_is_idempotent(journal in journal_strategy(), pl_class in 0usize..3) {
        let criteria = FilterCriteria {
            instrument: Some("us".to_string()),
            date_from: NaiveDate::from_ymd_opt(2025, 3, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 9, 1),
            trade_type: [TradeType::All, TradeType::Winning, TradeType::Losing][pl_class],
        };
        let once = filter_trades(&journal, &criteria);
        let twice = filter_trades(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    /// Sorting never adds, drops, or duplicates records.
    #[test]
    fn sorting_is_a_permutation(journal in journal_strategy()) {
        for key in [
            SortKey::MostRecent,
            SortKey::OldestFirst,
            SortKey::HighestProfit,
            SortKey::BiggestLoss,
            SortKey::Alphabetical,
        ] {
            let sorted = sort_trades(journal.clone(), key);
            prop_assert_eq!(sorted.len(), journal.len());
            let mut original_ids: Vec<_> = journal.iter().map(|r| r.id.clone()).collect();
            let mut sorted_ids: Vec<_> = sorted.iter().map(|r| r.id.clone()).collect();
            original_ids.sort();
            sorted_ids.sort();
            prop_assert_eq!(original_ids, sorted_ids);
        }
    }
}
