use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::format::format_amount;
use crate::models::{AppState, Category};

/// Icon shown next to an expense row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Restaurant,
    Vehicle,
    Utility,
    Bag,
}

impl Icon {
    pub fn for_category(category: &Category) -> Self {
        match category {
            Category::Food => Self::Restaurant,
            Category::Transport => Self::Vehicle,
            Category::Bills => Self::Utility,
            _ => Self::Bag,
        }
    }
}

/// One row of the expense list. `index` is only valid for the snapshot it
/// came from; any later add or delete may shift it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseView {
    pub index: usize,
    pub id: Uuid,
    pub item: String,
    pub amount: Decimal,
    pub amount_display: String,
    pub category: Category,
    pub icon: Icon,
    pub date: String,
}

/// Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplaySnapshot {
    pub limit: Decimal,
    pub total_spent: Decimal,
    pub remaining_or_overage: Decimal,
    pub is_over_budget: bool,
    pub progress_ratio: f64,
    pub expenses: Vec<ExpenseView>,
}

pub fn compute_snapshot(state: &AppState) -> DisplaySnapshot {
    let total_spent = state.total();
    let remaining_or_overage = state.limit.saturating_sub(total_spent);
    let progress_ratio = if state.limit > Decimal::ZERO {
        total_spent
            .checked_div(state.limit)
            .and_then(|r| r.to_f64())
            .map_or(1.0, |r| r.clamp(0.0, 1.0))
    } else {
        0.0
    };

    let expenses = state
        .expenses
        .iter()
        .enumerate()
        .map(|(index, e)| ExpenseView {
            index,
            id: e.id,
            item: e.item.clone(),
            amount: e.amount,
            amount_display: format_amount(e.amount),
            category: e.category.clone(),
            icon: Icon::for_category(&e.category),
            date: e.date.clone(),
        })
        .collect();

    DisplaySnapshot {
        limit: state.limit,
        total_spent,
        remaining_or_overage,
        is_over_budget: remaining_or_overage < Decimal::ZERO,
        progress_ratio,
        expenses,
    }
}
