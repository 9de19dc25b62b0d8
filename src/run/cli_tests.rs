#![allow(clippy::unwrap_used)]

use super::*;

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_split_defaults_to_food() {
    let a = args(&["Lunch", "250"]);
    let (item, amount, category) = split_expense_args(&a).unwrap();
    assert_eq!(item, "Lunch");
    assert_eq!(amount, "250");
    assert_eq!(category, "Food");
}

#[test]
fn test_split_multi_word_item_with_category() {
    let a = args(&["Bus", "to", "town", "80", "transport"]);
    let (item, amount, category) = split_expense_args(&a).unwrap();
    assert_eq!(item, "Bus to town");
    assert_eq!(amount, "80");
    assert_eq!(category, "transport");
}

#[test]
fn test_split_item_named_like_category() {
    // Two words only: the last is the amount, never a category.
    let a = args(&["Bills", "40"]);
    let (item, amount, category) = split_expense_args(&a).unwrap();
    assert_eq!((item.as_str(), amount, category), ("Bills", "40", "Food"));
}

#[test]
fn test_split_needs_item_and_amount() {
    assert!(split_expense_args(&args(&["250"])).is_err());
    assert!(split_expense_args(&args(&[])).is_err());
}

#[test]
fn test_parse_position_is_one_based() {
    assert_eq!(parse_position("1").unwrap(), 0);
    assert_eq!(parse_position("12").unwrap(), 11);
    assert!(parse_position("0").is_err());
    assert!(parse_position("-1").is_err());
    assert!(parse_position("two").is_err());
}
