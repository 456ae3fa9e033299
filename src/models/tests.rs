#![allow(clippy::unwrap_used)]

use chrono::Local;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_expense(amount: Decimal) -> Expense {
    Expense::new("Coffee".into(), amount, Local::now())
}

#[test]
fn test_new_assigns_unique_ids() {
    let a = make_expense(dec!(3.50));
    let b = make_expense(dec!(3.50));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_refund() {
    assert!(make_expense(dec!(-5.00)).is_refund());
    assert!(!make_expense(dec!(5.00)).is_refund());
    assert!(!make_expense(Decimal::ZERO).is_refund());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_expense(dec!(-42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_expense(dec!(42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_expense(Decimal::ZERO).abs_amount(), Decimal::ZERO);
}

// ── JSON shape ────────────────────────────────────────────────

#[test]
fn test_json_field_shapes() {
    let expense = make_expense(dec!(12.34));
    let value = serde_json::to_value(&expense).unwrap();

    assert!(value["id"].is_string());
    assert_eq!(value["category"], "Coffee");
    // Amounts persist as plain JSON numbers, not strings
    assert!(value["amount"].is_number());
    // Dates persist as ISO-8601 strings
    assert!(value["date"].as_str().unwrap().contains('T'));
}

#[test]
fn test_json_round_trip() {
    let expense = Expense::new("Rent".into(), dec!(1200.00), Local::now());
    let json = serde_json::to_string(&expense).unwrap();
    let back: Expense = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, expense.id);
    assert_eq!(back.category, expense.category);
    assert_eq!(back.amount, expense.amount);
    assert_eq!(back.date, expense.date);
}

#[test]
fn test_json_decode_known_blob() {
    let json = r#"{
        "id": "b44f7fd2-6f7a-4b63-8cd0-1c2d3e4f5a6b",
        "category": "Groceries",
        "amount": 57.25,
        "date": "2026-08-10T12:30:00+00:00"
    }"#;
    let expense: Expense = serde_json::from_str(json).unwrap();
    assert_eq!(expense.category, "Groceries");
    assert_eq!(expense.amount, dec!(57.25));
}
