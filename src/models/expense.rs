use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::Category;
use crate::error::ValidationError;

/// Date stamp format, e.g. "Jan 05".
const DATE_FORMAT: &str = "%b %d";

/// Amounts are stored as JSON numbers (f64). Up to 1e12 with two decimal
/// places is at most 15 significant digits, which an f64 carries exactly.
pub(super) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);
const MAX_SCALE: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Session-local identity; regenerated on every load.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub item: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: String,
}

impl Expense {
    /// Build a record stamped with today's date.
    pub fn new(draft: ExpenseDraft) -> Self {
        Self::dated(draft, chrono::Local::now().format(DATE_FORMAT).to_string())
    }

    pub fn dated(draft: ExpenseDraft, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: draft.item,
            amount: draft.amount,
            category: draft.category,
            date,
        }
    }

    /// Overwrite the editable fields, keeping `date` and `id`.
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.item = draft.item;
        self.amount = draft.amount;
        self.category = draft.category;
    }
}

// `id` is not part of the persisted record, so it is not part of equality.
impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
            && self.amount == other.amount
            && self.category == other.category
            && self.date == other.date
    }
}

/// Validated user input for creating or editing an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub item: String,
    pub amount: Decimal,
    pub category: Category,
}

impl ExpenseDraft {
    pub fn parse(item: &str, amount: &str, category: &str) -> Result<Self, ValidationError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(ValidationError::EmptyItem);
        }
        let amount = parse_amount(amount)?;
        let category = Category::parse(category)
            .ok_or_else(|| ValidationError::InvalidCategory(category.trim().to_string()))?;
        Ok(Self {
            item: item.to_string(),
            amount,
            category,
        })
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Reject values that would not survive a save and reload unchanged.
/// Returns the value with trailing zeros dropped.
fn check_bounds(value: Decimal, raw: &str) -> Result<Decimal, ValidationError> {
    let value = value.normalize();
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(raw.trim().to_string()));
    }
    if value.scale() > MAX_SCALE {
        return Err(ValidationError::TooManyDecimals(raw.trim().to_string()));
    }
    Ok(value)
}

/// Parse a strictly positive expense amount from raw text.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount =
        parse_decimal(raw).ok_or_else(|| ValidationError::InvalidAmount(raw.trim().to_string()))?;
    check_amount(amount, raw)
}

/// Bounds check for an amount that is already a number, e.g. one read
/// back from the data file.
pub fn check_amount(amount: Decimal, raw: &str) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    check_bounds(amount, raw)
}

/// Parse a budget limit. Zero is allowed and means "no budget".
pub fn parse_limit(raw: &str) -> Result<Decimal, ValidationError> {
    match parse_decimal(raw) {
        Some(limit) => check_limit(limit, raw),
        None => Err(ValidationError::InvalidLimit(raw.trim().to_string())),
    }
}

pub fn check_limit(limit: Decimal, raw: &str) -> Result<Decimal, ValidationError> {
    if limit < Decimal::ZERO {
        return Err(ValidationError::InvalidLimit(raw.trim().to_string()));
    }
    check_bounds(limit, raw)
}
