#![allow(clippy::unwrap_used)]

use chrono::{Duration, Local};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::*;

fn open_temp() -> (tempfile::TempDir, ExpenseStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::open(&dir.path().join("settings.json"));
    (dir, store)
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_empty_store() {
    let (_dir, store) = open_temp();
    assert!(store.is_empty());
    assert_eq!(store.total(), Decimal::ZERO);
}

#[test]
fn test_add_and_total() {
    let (_dir, mut store) = open_temp();

    store.add("Coffee".into(), dec!(3.50), Local::now());
    assert_eq!(store.total(), dec!(3.50));

    store.add("Rent".into(), dec!(1200.00), Local::now());
    assert_eq!(store.total(), dec!(1203.50));

    store.remove_all();
    assert_eq!(store.total(), Decimal::ZERO);
    assert!(store.expenses().is_empty());
}

#[test]
fn test_total_mixed_signs() {
    let (_dir, mut store) = open_temp();
    store.add("Lunch".into(), dec!(12.75), Local::now());
    store.add("Refund".into(), dec!(-4.25), Local::now());
    store.add("Freebie".into(), Decimal::ZERO, Local::now());
    store.add("Snack".into(), dec!(0.99), Local::now());
    assert_eq!(store.total(), dec!(9.49));
}

// ── CRUD ──────────────────────────────────────────────────────

#[test]
fn test_insertion_order_preserved() {
    let (_dir, mut store) = open_temp();
    let now = Local::now();
    // Insert out of date order; the list must not re-sort
    store.add("Second".into(), dec!(2.00), now);
    store.add("First".into(), dec!(1.00), now - Duration::hours(1));
    store.add("Third".into(), dec!(3.00), now + Duration::hours(1));

    let categories: Vec<&str> = store.expenses().iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, ["Second", "First", "Third"]);
}

#[test]
fn test_update_replaces_in_place() {
    let (_dir, mut store) = open_temp();
    store.add("A".into(), dec!(1.00), Local::now());
    let target = store.add("B".into(), dec!(2.00), Local::now());
    store.add("C".into(), dec!(3.00), Local::now());

    let mut edited = target.clone();
    edited.category = "Groceries".into();
    edited.amount = dec!(20.00);
    store.update(edited);

    let expenses = store.expenses();
    assert_eq!(expenses.len(), 3);
    // Position and id survive the edit
    assert_eq!(expenses[1].id, target.id);
    assert_eq!(expenses[1].category, "Groceries");
    assert_eq!(expenses[1].amount, dec!(20.00));
    assert_eq!(store.total(), dec!(24.00));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let (_dir, mut store) = open_temp();
    store.add("Coffee".into(), dec!(3.50), Local::now());

    let phantom = Expense::new("Ghost".into(), dec!(99.99), Local::now());
    store.update(phantom);

    assert_eq!(store.len(), 1);
    assert_eq!(store.expenses()[0].category, "Coffee");
    assert_eq!(store.total(), dec!(3.50));
}

#[test]
fn test_remove_by_id() {
    let (_dir, mut store) = open_temp();
    store.add("Keep".into(), dec!(1.00), Local::now());
    let victim = store.add("Drop".into(), dec!(2.00), Local::now());
    store.add("Keep too".into(), dec!(3.00), Local::now());

    store.remove(&[victim.id]);
    assert_eq!(store.len(), 2);
    assert!(store.expenses().iter().all(|e| e.id != victim.id));

    // Unknown id leaves the list untouched
    store.remove(&[Uuid::new_v4()]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_remove_multiple_ids() {
    let (_dir, mut store) = open_temp();
    let a = store.add("A".into(), dec!(1.00), Local::now());
    store.add("B".into(), dec!(2.00), Local::now());
    let c = store.add("C".into(), dec!(3.00), Local::now());

    store.remove(&[a.id, c.id]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.expenses()[0].category, "B");
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = ExpenseStore::open(&path);
    let coffee = store.add("Coffee".into(), dec!(3.50), Local::now());
    let rent = store.add("Rent".into(), dec!(1200.00), Local::now() - Duration::days(3));

    let reopened = ExpenseStore::open(&path);
    let expenses = reopened.expenses();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].id, coffee.id);
    assert_eq!(expenses[0].category, "Coffee");
    assert_eq!(expenses[0].amount, dec!(3.50));
    assert_eq!(expenses[0].date, coffee.date);
    assert_eq!(expenses[1].id, rent.id);
    assert_eq!(expenses[1].date, rent.date);
    assert_eq!(reopened.total(), dec!(1203.50));
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::open(&dir.path().join("does-not-exist.json"));
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let store = ExpenseStore::open(&path);
    assert!(store.is_empty());
    assert_eq!(store.total(), Decimal::ZERO);
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    // Valid JSON, wrong shape under the expenses key
    std::fs::write(&path, r#"{"expenses": {"oops": true}}"#).unwrap();

    let store = ExpenseStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_store_is_still_usable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "garbage").unwrap();

    let mut store = ExpenseStore::open(&path);
    store.add("Fresh start".into(), dec!(5.00), Local::now());

    let reopened = ExpenseStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.total(), dec!(5.00));
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    // A directory as the settings path makes every write fail
    let mut store = ExpenseStore::open(dir.path());

    store.add("Coffee".into(), dec!(3.50), Local::now());
    store.add("Rent".into(), dec!(1200.00), Local::now());

    // Saves failed silently; the in-memory list is still authoritative
    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), dec!(1203.50));

    let victim = store.expenses()[0].id;
    store.remove(&[victim]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.total(), dec!(1200.00));

    // Nothing usable was ever persisted
    let reopened = ExpenseStore::open(dir.path());
    assert!(reopened.is_empty());
}

#[test]
fn test_persisted_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = ExpenseStore::open(&path);
    store.add("Coffee".into(), dec!(3.50), Local::now());

    let raw = std::fs::read_to_string(&path).unwrap();
    let root: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let list = root["expenses"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert!(list[0]["id"].is_string());
    assert_eq!(list[0]["category"], "Coffee");
    assert!(list[0]["amount"].is_number());
    assert!(list[0]["date"].is_string());
}

#[test]
fn test_save_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = ExpenseStore::open(&path);
    store.add("Coffee".into(), dec!(3.50), Local::now());

    let first = std::fs::read(&path).unwrap();
    store.save();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

// ── Retention ─────────────────────────────────────────────────

#[test]
fn test_retention_purges_on_save() {
    let (_dir, mut store) = open_temp();
    let cutoff = retention_cutoff(Local::now());

    store.add("Stale".into(), dec!(10.00), cutoff - Duration::seconds(1));
    store.add("Fresh".into(), dec!(20.00), cutoff + Duration::seconds(30));

    // add() saves, and save prunes
    assert_eq!(store.len(), 1);
    assert_eq!(store.expenses()[0].category, "Fresh");
    assert_eq!(store.total(), dec!(20.00));
}

#[test]
fn test_retention_purges_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let cutoff = retention_cutoff(Local::now());
    let stale = Expense::new("Stale".into(), dec!(10.00), cutoff - Duration::hours(1));
    let fresh = Expense::new("Fresh".into(), dec!(20.00), cutoff + Duration::hours(1));
    let blob = serde_json::json!({ "expenses": [stale, fresh] });
    std::fs::write(&path, serde_json::to_string(&blob).unwrap()).unwrap();

    let store = ExpenseStore::open(&path);
    assert_eq!(store.len(), 1);
    assert_eq!(store.expenses()[0].category, "Fresh");
}

#[test]
fn test_retention_cutoff_is_calendar_relative() {
    let now = Local::now();
    let cutoff = retention_cutoff(now);
    // A calendar month back is 28-31 days, never a fixed duration
    let days = (now - cutoff).num_days();
    assert!((28..=31).contains(&days), "cutoff was {days} days back");
}

#[test]
fn test_reload_discards_unsaved_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = ExpenseStore::open(&path);
    store.add("Coffee".into(), dec!(3.50), Local::now());

    // A second handle on the same file clears it
    let mut other = ExpenseStore::open(&path);
    other.remove_all();

    store.reload();
    assert!(store.is_empty());
}
