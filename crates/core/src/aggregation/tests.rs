//! Tests for aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use asset_manager_shared::types::{Record, RecordType};

use super::engine::AggregationEngine;
use super::error::AggregationError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn asset(on: NaiveDate, description: &str, amount: Decimal, accessible: bool) -> Record {
    Record::new(on, RecordType::Asset, description, amount, accessible)
}

fn liability(on: NaiveDate, description: &str, amount: Decimal) -> Record {
    Record::new(on, RecordType::Liability, description, amount, true)
}

#[test]
fn test_summary_and_net_worth() {
    let day = date(2024, 1, 1);
    let records = vec![
        asset(day, "Savings", dec!(1000), true),
        asset(day, "Brokerage", dec!(5000), true),
        liability(day, "Credit Card", dec!(500)),
    ];
    let engine = AggregationEngine::from_records(&records).unwrap();

    let summaries = engine.daily_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].record_type, RecordType::Asset);
    assert_eq!(summaries[0].total_amount, dec!(6000));
    assert_eq!(summaries[1].record_type, RecordType::Liability);
    assert_eq!(summaries[1].total_amount, dec!(500));

    assert_eq!(engine.net_worth(day), dec!(5500));
    assert_eq!(engine.accessible_net_worth(day), dec!(5500));
}

#[test]
fn test_inaccessible_assets_carved_out() {
    let day = date(2024, 1, 15);
    let records = vec![
        asset(day, "Savings", dec!(1000.00), true),
        asset(day, "401k", dec!(5000.00), false),
        liability(day, "Mortgage", dec!(2000.00)),
    ];
    let engine = AggregationEngine::from_records(&records).unwrap();

    let totals = engine.totals(day);
    assert_eq!(totals.total_assets, dec!(6000.00));
    assert_eq!(totals.total_inaccessible_assets, dec!(5000.00));
    assert_eq!(engine.net_worth(day), dec!(4000.00));
    assert_eq!(engine.accessible_net_worth(day), dec!(-1000.00));

    let inaccessible = engine.inaccessible_summaries();
    assert_eq!(inaccessible.len(), 1);
    assert_eq!(inaccessible[0].date, day);
    assert_eq!(inaccessible[0].record_type, RecordType::Asset);
    assert_eq!(inaccessible[0].total_amount, dec!(5000.00));
}

#[test]
fn test_unknown_date_is_zero() {
    let engine = AggregationEngine::from_records(&[]).unwrap();
    assert_eq!(engine.net_worth(date(2024, 1, 1)), Decimal::ZERO);
    assert!(engine.daily_summaries().is_empty());
    assert!(engine.report().is_empty());
}

#[test]
fn test_zero_amount_still_produces_summary() {
    let day = date(2024, 2, 1);
    let engine =
        AggregationEngine::from_records(&[liability(day, "Paid off", Decimal::ZERO)]).unwrap();
    let summaries = engine.daily_summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_amount, Decimal::ZERO);
}

#[test]
fn test_series_are_date_ordered_and_sorted_by_description() {
    let records = vec![
        asset(date(2024, 3, 1), "Savings", dec!(300), true),
        asset(date(2024, 1, 1), "Savings", dec!(100), true),
        asset(date(2024, 2, 1), "Brokerage", dec!(50), true),
        asset(date(2024, 2, 1), "Savings", dec!(200), true),
        liability(date(2024, 1, 1), "Card", dec!(10)),
    ];
    let engine = AggregationEngine::from_records(&records).unwrap();

    let names: Vec<_> = engine.asset_series().keys().cloned().collect();
    assert_eq!(names, vec!["Brokerage", "Savings"]);

    let savings: Vec<_> = engine.asset_series()["Savings"]
        .iter()
        .map(|p| (p.date, p.amount))
        .collect();
    assert_eq!(
        savings,
        vec![
            (date(2024, 1, 1), dec!(100)),
            (date(2024, 2, 1), dec!(200)),
            (date(2024, 3, 1), dec!(300)),
        ]
    );
    assert_eq!(engine.liability_series().len(), 1);
}

#[test]
fn test_report_summary_ascends_by_date() {
    let records = vec![
        asset(date(2024, 3, 1), "Savings", dec!(300), true),
        liability(date(2024, 1, 1), "Card", dec!(10)),
        asset(date(2024, 1, 1), "Savings", dec!(100), true),
    ];
    let report = AggregationEngine::from_records(&records).unwrap().report();

    let dates: Vec<_> = report.summary.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 3, 1)]);
    assert_eq!(report.summary[0].net_worth, dec!(90));
    assert_eq!(report.summary[1].liabilities, Decimal::ZERO);
    assert_eq!(report.assets[0].description, "Savings");
    assert_eq!(report.liabilities[0].points.len(), 1);
}

#[test]
fn test_report_serializes_amounts_as_strings() {
    let day = date(2024, 1, 1);
    let report = AggregationEngine::from_records(&[asset(day, "Savings", dec!(12.50), true)])
        .unwrap()
        .report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"][0]["date"], "2024-01-01");
    assert_eq!(json["summary"][0]["net_worth"], "12.50");
    assert_eq!(json["assets"][0]["points"][0]["amount"], "12.50");
}

#[test]
fn test_total_overflow_is_an_error() {
    let day = date(2024, 1, 1);
    let half = Decimal::MAX / dec!(2) + Decimal::ONE;
    let records = vec![
        asset(day, "Savings", half, false),
        asset(day, "Brokerage", half, false),
    ];

    let err = AggregationEngine::from_records(&records).unwrap_err();
    assert_eq!(err, AggregationError::Overflow { date: day });
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        0u32..5,
        prop_oneof![Just(RecordType::Asset), Just(RecordType::Liability)],
        "[A-E]",
        0i64..1_000_000,
        any::<bool>(),
    )
        .prop_map(|(offset, record_type, description, cents, accessible)| {
            Record::new(
                date(2024, 1, 1 + offset),
                record_type,
                description,
                Decimal::new(cents, 2),
                accessible,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Without inaccessible assets, accessible net worth equals net worth.
    #[test]
    fn prop_accessible_equals_net_without_inaccessible(
        records in prop::collection::vec(record_strategy(), 0..30),
    ) {
        let records: Vec<Record> = records
            .into_iter()
            .map(|mut r| { r.accessible = true; r })
            .collect();
        let engine = AggregationEngine::from_records(&records).unwrap();

        for day in engine.dates().collect::<Vec<_>>() {
            prop_assert_eq!(engine.accessible_net_worth(day), engine.net_worth(day));
        }
        prop_assert!(engine.inaccessible_summaries().is_empty());
    }

    /// Summaries add up to the sum of the input amounts per type.
    #[test]
    fn prop_summaries_preserve_totals(
        records in prop::collection::vec(record_strategy(), 0..30),
    ) {
        let engine = AggregationEngine::from_records(&records).unwrap();

        for record_type in [RecordType::Asset, RecordType::Liability] {
            let expected: Decimal = records
                .iter()
                .filter(|r| r.record_type == record_type)
                .map(|r| r.amount)
                .sum();
            let actual: Decimal = engine
                .daily_summaries()
                .iter()
                .filter(|s| s.record_type == record_type)
                .map(|s| s.total_amount)
                .sum();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Summary dates are strictly ascending per type.
    #[test]
    fn prop_summaries_are_ordered(
        records in prop::collection::vec(record_strategy(), 0..30),
    ) {
        let summaries = AggregationEngine::from_records(&records).unwrap().daily_summaries();
        for pair in summaries.windows(2) {
            prop_assert!((pair[0].date, pair[0].record_type) < (pair[1].date, pair[1].record_type));
        }
    }
}
