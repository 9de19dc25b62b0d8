use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::expense::{check_amount, check_limit};
use super::{Expense, ExpenseDraft};
use crate::error::ValidationError;

/// Everything that gets persisted: the budget ceiling and the expenses,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub limit: Decimal,
    pub expenses: Vec<Expense>,
}

impl AppState {
    /// Sum of all amounts. Saturates at `Decimal::MAX` instead of
    /// overflowing.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or_else(|| {
            tracing::warn!("expense total overflowed; showing the maximum");
            Decimal::MAX
        })
    }

    pub fn checked_total(&self) -> Option<Decimal> {
        self.expenses
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
    }

    /// Bring state read from disk back within what the app itself would
    /// accept: an out-of-range limit becomes zero and records with an empty
    /// item or an unacceptable amount are dropped. Returns how many fixes
    /// were made.
    pub fn repair(&mut self) -> usize {
        let mut fixed = 0;
        match check_limit(self.limit, &self.limit.to_string()) {
            Ok(limit) => self.limit = limit,
            Err(e) => {
                tracing::warn!("resetting budget limit: {e}");
                self.limit = Decimal::ZERO;
                fixed += 1;
            }
        }
        let before = self.expenses.len();
        self.expenses.retain_mut(|e| {
            if e.item.trim().is_empty() {
                tracing::warn!("dropping expense with no item name");
                return false;
            }
            match check_amount(e.amount, &e.amount.to_string()) {
                Ok(amount) => {
                    e.amount = amount;
                    true
                }
                Err(err) => {
                    tracing::warn!(item = %e.item, "dropping expense: {err}");
                    false
                }
            }
        });
        fixed + before - self.expenses.len()
    }

    pub fn get(&self, index: usize) -> Result<&Expense, ValidationError> {
        self.expenses
            .get(index)
            .ok_or(ValidationError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            })
    }

    /// New records always go to the front.
    pub fn push_front(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    pub fn replace(&mut self, index: usize, draft: ExpenseDraft) -> Result<(), ValidationError> {
        let len = self.expenses.len();
        let expense = self
            .expenses
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })?;
        expense.apply(draft);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Expense, ValidationError> {
        if index >= self.expenses.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }
}
