#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_small() {
    assert_eq!(format_amount(dec!(3.50)), "$3.50");
}

#[test]
fn test_format_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_negative() {
    assert_eq!(format_amount(dec!(-4.25)), "-$4.25");
}

#[test]
fn test_format_thousands() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_exact_thousand() {
    assert_eq!(format_amount(dec!(1000)), "$1,000.00");
}

#[test]
fn test_format_rounds_to_cents() {
    assert_eq!(format_amount(dec!(9.999)), "$10.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("3.50"), Some(dec!(3.50)));
}

#[test]
fn test_parse_amount_comma_separator() {
    assert_eq!(parse_amount("3,50"), Some(dec!(3.50)));
}

#[test]
fn test_parse_amount_negative_and_zero() {
    assert_eq!(parse_amount("-12.75"), Some(dec!(-12.75)));
    assert_eq!(parse_amount("0"), Some(dec!(0)));
}

#[test]
fn test_parse_amount_whitespace() {
    assert_eq!(parse_amount("  42 "), Some(dec!(42)));
}

#[test]
fn test_parse_amount_garbage() {
    assert_eq!(parse_amount("lots"), None);
    assert_eq!(parse_amount(""), None);
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_full() {
    let dt = parse_date("2026-08-10 14:30").unwrap();
    assert_eq!(format_date(dt), "2026-08-10 14:30");
}

#[test]
fn test_parse_date_bare_date_gets_noon() {
    let dt = parse_date("2026-08-10").unwrap();
    assert_eq!(format_date(dt), "2026-08-10 12:00");
}

#[test]
fn test_parse_date_empty_is_now() {
    let before = chrono::Local::now();
    let dt = parse_date("").unwrap();
    assert!(dt >= before);
}

#[test]
fn test_parse_date_garbage() {
    assert_eq!(parse_date("yesterday"), None);
    assert_eq!(parse_date("2026-13-40"), None);
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_scrolls() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 3);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}
