#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;
use crate::error::StoreError;
use crate::models::{AppState, Expense, ExpenseDraft};

#[derive(Default)]
struct Recorder {
    shown: Vec<DisplaySnapshot>,
}

impl View for Recorder {
    fn show(&mut self, snapshot: DisplaySnapshot) {
        self.shown.push(snapshot);
    }
}

impl Recorder {
    fn last(&self) -> &DisplaySnapshot {
        self.shown.last().unwrap()
    }
}

fn controller() -> (TempDir, ViewController<Recorder>) {
    let dir = TempDir::new().unwrap();
    let store = BudgetStore::open(dir.path().join("expenses.json"));
    (dir, ViewController::new(store, Recorder::default()))
}

fn state_with(limit: Decimal, amounts: &[(&str, Decimal, Category)]) -> AppState {
    let mut state = AppState {
        limit,
        expenses: Vec::new(),
    };
    for (item, amount, category) in amounts {
        state.push_front(Expense::dated(
            ExpenseDraft {
                item: (*item).into(),
                amount: *amount,
                category: category.clone(),
            },
            "Jan 05".into(),
        ));
    }
    state
}

// ── compute_snapshot ──────────────────────────────────────────

#[test]
fn test_snapshot_empty_state() {
    let snap = compute_snapshot(&AppState::default());
    assert_eq!(snap.total_spent, Decimal::ZERO);
    assert_eq!(snap.remaining_or_overage, Decimal::ZERO);
    assert!(!snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 0.0);
    assert!(snap.expenses.is_empty());
}

#[test]
fn test_snapshot_under_budget() {
    let state = state_with(dec!(1000), &[("Lunch", dec!(250), Category::Food)]);
    let snap = compute_snapshot(&state);
    assert_eq!(snap.total_spent, dec!(250));
    assert_eq!(snap.remaining_or_overage, dec!(750));
    assert!(!snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 0.25);
}

#[test]
fn test_snapshot_over_budget_clamps_ratio() {
    let state = state_with(
        dec!(1000),
        &[
            ("Lunch", dec!(250), Category::Food),
            ("Rent", dec!(900), Category::Bills),
        ],
    );
    let snap = compute_snapshot(&state);
    assert_eq!(snap.total_spent, dec!(1150));
    assert_eq!(snap.remaining_or_overage, dec!(-150));
    assert!(snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 1.0);
}

#[test]
fn test_snapshot_no_limit_is_over_budget_with_zero_ratio() {
    let state = state_with(Decimal::ZERO, &[("Tea", dec!(5), Category::Food)]);
    let snap = compute_snapshot(&state);
    assert_eq!(snap.remaining_or_overage, dec!(-5));
    assert!(snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 0.0);
}

#[test]
fn test_snapshot_exactly_on_budget_is_not_over() {
    let state = state_with(dec!(100), &[("Shoes", dec!(100), Category::Shopping)]);
    let snap = compute_snapshot(&state);
    assert_eq!(snap.remaining_or_overage, Decimal::ZERO);
    assert!(!snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 1.0);
}

#[test]
fn test_snapshot_total_is_sum_of_amounts() {
    let state = state_with(
        dec!(50),
        &[
            ("A", dec!(0.10), Category::Food),
            ("B", dec!(0.20), Category::Food),
            ("C", dec!(19.70), Category::Transport),
        ],
    );
    assert_eq!(compute_snapshot(&state).total_spent, dec!(20));
}

#[test]
fn test_snapshot_with_overflowing_amounts_does_not_panic() {
    let state = state_with(
        dec!(100),
        &[
            ("A", Decimal::MAX, Category::Food),
            ("B", dec!(1), Category::Food),
        ],
    );
    let snap = compute_snapshot(&state);
    assert_eq!(snap.total_spent, Decimal::MAX);
    assert!(snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 1.0);
}

#[test]
fn test_snapshot_rows_carry_index_and_icon() {
    let mut state = state_with(
        dec!(100),
        &[
            ("Lunch", dec!(12), Category::Food),
            ("Bus", dec!(2), Category::Transport),
            ("Power", dec!(40), Category::Bills),
            ("Shirt", dec!(25), Category::Shopping),
            ("Film", dec!(9), Category::Entertainment),
        ],
    );
    state.expenses[0].category = Category::Other("Gifts".into());

    let snap = compute_snapshot(&state);
    let rows: Vec<(usize, &str, Icon)> = snap
        .expenses
        .iter()
        .map(|v| (v.index, v.item.as_str(), v.icon))
        .collect();
    assert_eq!(
        rows,
        [
            (0, "Film", Icon::Bag),
            (1, "Shirt", Icon::Bag),
            (2, "Power", Icon::Utility),
            (3, "Bus", Icon::Vehicle),
            (4, "Lunch", Icon::Restaurant),
        ]
    );
    assert_eq!(snap.expenses[2].amount_display, "KES 40.00");
    assert_eq!(snap.expenses[2].id, state.expenses[2].id);
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "KES 1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "KES 0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-150)), "-KES 150.00");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.891)), "KES 1,234,567.89");
}

// ── ViewController ────────────────────────────────────────────

#[test]
fn test_startup_publishes_once() {
    let (_dir, c) = controller();
    assert_eq!(c.view().shown.len(), 1);
    assert_eq!(c.view().last(), &DisplaySnapshot::default());
}

#[test]
fn test_add_lunch_scenario() {
    let (_dir, mut c) = controller();
    c.on_set_limit("1000").unwrap();
    c.on_add("Lunch", "250", "Food").unwrap();

    let snap = c.view().last();
    assert_eq!(snap.total_spent, dec!(250));
    assert_eq!(snap.remaining_or_overage, dec!(750));
    assert!(!snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 0.25);

    c.on_add("Rent", "900", "Bills").unwrap();
    let snap = c.view().last();
    assert_eq!(snap.total_spent, dec!(1150));
    assert_eq!(snap.remaining_or_overage, dec!(-150));
    assert!(snap.is_over_budget);
    assert_eq!(snap.progress_ratio, 1.0);
    assert_eq!(snap.expenses[0].item, "Rent");
}

#[test]
fn test_invalid_input_does_not_notify() {
    let (_dir, mut c) = controller();
    let err = c.on_add("Lunch", "abc", "Food").unwrap_err();
    assert!(err.is_validation());
    assert!(c.on_set_limit("-1").is_err());
    assert!(c.on_delete(0).is_err());
    assert_eq!(c.view().shown.len(), 1);
}

#[test]
fn test_huge_amount_rejected_without_notify() {
    let (_dir, mut c) = controller();
    let err = c
        .on_add("A", "79228162514264337593543950335", "Food")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Invalid(ValidationError::AmountTooLarge(_))
    ));
    c.on_add("B", "1", "Food").unwrap();
    assert_eq!(c.view().shown.len(), 2);
    assert_eq!(c.view().last().total_spent, dec!(1));
}

#[test]
fn test_each_change_notifies() {
    let (_dir, mut c) = controller();
    c.on_add("Lunch", "10", "Food").unwrap();
    c.on_set_limit("100").unwrap();
    c.on_delete(0).unwrap();
    assert_eq!(c.view().shown.len(), 4);
    assert!(c.view().last().expenses.is_empty());
}

#[test]
fn test_write_failure_still_notifies() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = BudgetStore::open(blocker.join("expenses.json"));
    let mut c = ViewController::new(store, Recorder::default());

    let err = c.on_add("Lunch", "10", "Food").unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(c.view().shown.len(), 2);
    assert_eq!(c.view().last().total_spent, dec!(10));
}

// ── Edit state machine ────────────────────────────────────────

#[test]
fn test_edit_open_prefills() {
    let (_dir, mut c) = controller();
    c.on_add("Lunch", "12.50", "Food").unwrap();

    let prefill = c.on_edit_open(0).unwrap();
    assert_eq!(prefill.item, "Lunch");
    assert_eq!(prefill.amount, "12.5");
    assert_eq!(prefill.category, Category::Food);
    assert_eq!(c.pending_edit(), Some(0));
}

#[test]
fn test_edit_open_invalid_index_is_silent() {
    let (_dir, mut c) = controller();
    assert!(c.on_edit_open(0).is_none());
    assert_eq!(c.pending_edit(), None);
    assert_eq!(c.view().shown.len(), 1);
}

#[test]
fn test_edit_open_twice_last_wins() {
    let (_dir, mut c) = controller();
    c.on_add("A", "1", "Food").unwrap();
    c.on_add("B", "2", "Food").unwrap();
    c.on_edit_open(0).unwrap();
    c.on_edit_open(1).unwrap();
    assert_eq!(c.pending_edit(), Some(1));
}

#[test]
fn test_edit_save_updates_and_closes() {
    let (_dir, mut c) = controller();
    c.on_add("Lunch", "12", "Food").unwrap();
    let date = c.view().last().expenses[0].date.clone();

    c.on_edit_open(0).unwrap();
    c.on_edit_save(0, "Dinner", "30", "Entertainment").unwrap();

    assert_eq!(c.pending_edit(), None);
    let row = &c.view().last().expenses[0];
    assert_eq!(row.item, "Dinner");
    assert_eq!(row.amount, dec!(30));
    assert_eq!(row.category, Category::Entertainment);
    assert_eq!(row.date, date);
}

#[test]
fn test_edit_save_failure_also_closes() {
    let (_dir, mut c) = controller();
    c.on_add("Lunch", "12", "Food").unwrap();
    c.on_edit_open(0).unwrap();

    assert!(c.on_edit_save(0, "Lunch", "twelve", "Food").is_err());
    assert_eq!(c.pending_edit(), None);
    assert_eq!(c.store().state().expenses[0].amount, dec!(12));
}

#[test]
fn test_edit_cancel_closes() {
    let (_dir, mut c) = controller();
    c.on_add("Lunch", "12", "Food").unwrap();
    c.on_edit_open(0).unwrap();
    c.on_edit_cancel();
    assert_eq!(c.pending_edit(), None);
    assert_eq!(c.view().shown.len(), 2);
}

#[test]
fn test_edit_save_rejects_stale_target() {
    let (_dir, mut c) = controller();
    c.on_add("Old", "1", "Food").unwrap();
    c.on_add("Middle", "2", "Food").unwrap();
    c.on_add("New", "3", "Food").unwrap();

    // Open "Middle" at index 1, then delete the row above it.
    c.on_edit_open(1).unwrap();
    c.on_delete(0).unwrap();

    let err = c.on_edit_save(1, "Changed", "9", "Food").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Invalid(ValidationError::StaleEdit { index: 1 })
    ));
    let items: Vec<&str> = c
        .store()
        .state()
        .expenses
        .iter()
        .map(|e| e.item.as_str())
        .collect();
    assert_eq!(items, ["Middle", "Old"]);
    assert_eq!(c.pending_edit(), None);
}
