use chrono::NaiveDate;

use expense_ledger::models::{CategorySet, ExpenseRecord, Money, NewExpense};
use expense_ledger::services::{aggregate, filter, FilterSpec, Ledger};
use expense_ledger::{ExpenseError, Session};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sum(records: &[&ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount()).sum()
}

#[test]
fn test_add_filter_aggregate_remove() {
    let mut ledger = Ledger::with_categories(CategorySet::default());
    ledger
        .add(NewExpense::new("Groceries", Money::from_units(60), "Food", date(2024, 3, 1), "market"))
        .unwrap();
    ledger
        .add(NewExpense::new("Taxi", Money::from_minor(1850), "Transportation", date(2024, 3, 2), "airport"))
        .unwrap();
    ledger
        .add(NewExpense::new("Dinner", Money::from_units(40), "Food", date(2024, 3, 3), "friends"))
        .unwrap();
    assert_eq!(ledger.total(), Money::from_minor(11850));

    // Excludes the earliest record
    let spec = FilterSpec::new().from(date(2024, 3, 2));
    let visible = ledger.filter(&spec);
    assert_eq!(visible.len(), 2);

    let summary = aggregate(visible.iter().copied()).unwrap();
    assert_eq!(summary.labels(), vec!["Transportation", "Food"]);
    assert_eq!(summary.get_by_name("Transportation"), Some(Money::from_minor(1850)));
    let food = ledger.categories().resolve("Food").cloned().unwrap();
    assert_eq!(summary.get(&food), Some(Money::from_units(40)));
    assert_eq!(summary.total(), sum(&visible));

    let before = ledger.total();
    let removed = ledger.remove_visible(&spec, 1).unwrap();
    assert_eq!(removed.name(), "Dinner");
    assert_eq!(before - ledger.total(), removed.amount());

    let everything = ledger.filter(&FilterSpec::new());
    assert!(everything.iter().all(|r| r.id() != removed.id()));
    let summary = aggregate(everything).unwrap();
    assert_eq!(summary.get_by_name("Food"), Some(Money::from_units(60)));
    assert_eq!(summary.total(), ledger.total());
}

#[test]
fn test_filter_examples() {
    let mut ledger = Ledger::new();
    let a = ledger
        .add(NewExpense::new("A", Money::from_units(1), "Food", date(2024, 1, 5), "a"))
        .unwrap()
        .id();
    let b = ledger
        .add(NewExpense::new("B", Money::from_units(1), "Rent", date(2024, 2, 10), "b"))
        .unwrap()
        .id();

    let food = ledger.categories().resolve("Food").cloned().unwrap();
    let by_category = filter(ledger.records(), &FilterSpec::new().category(food));
    assert_eq!(by_category.iter().map(|r| r.id()).collect::<Vec<_>>(), vec![a]);

    let by_date = filter(ledger.records(), &FilterSpec::new().from(date(2024, 2, 1)));
    assert_eq!(by_date.iter().map(|r| r.id()).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn test_failed_operations_leave_ledger_untouched() {
    let mut ledger = Ledger::new();
    assert!(matches!(
        ledger.remove_at(0),
        Err(ExpenseError::IndexOutOfRange { index: 0, len: 0 })
    ));

    let err = ledger
        .add(NewExpense::new("", Money::from_units(10), "Food", date(2024, 1, 1), "desc"))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(ledger.len(), 0);
    assert_eq!(ledger.total(), Money::zero());
}

#[test]
fn test_independent_sessions() {
    let mut first = Session::new(CategorySet::default());
    let second = Session::new(CategorySet::new(["Travel"]).unwrap());

    first
        .add(NewExpense::new("Lunch", Money::from_units(8), "Food", date(2024, 1, 1), "x"))
        .unwrap();

    assert_eq!(first.ledger().len(), 1);
    assert!(second.ledger().is_empty());
    assert!(second.categories().resolve("Food").is_none());
}
