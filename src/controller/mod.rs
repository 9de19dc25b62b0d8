mod format;
mod snapshot;

pub use format::format_amount;
pub use snapshot::{compute_snapshot, DisplaySnapshot, ExpenseView, Icon};

use uuid::Uuid;

use crate::error::{StoreResult, ValidationError};
use crate::models::Category;
use crate::store::BudgetStore;

/// Receives a fresh snapshot after every change to the stored state.
pub trait View {
    fn show(&mut self, snapshot: DisplaySnapshot);
}

/// Current values of a record, for pre-filling an edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPrefill {
    pub index: usize,
    pub item: String,
    pub amount: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingEdit {
    index: usize,
    id: Uuid,
}

/// Turns user intents into store mutations and republishes the snapshot
/// whenever the state actually changed.
pub struct ViewController<V: View> {
    store: BudgetStore,
    view: V,
    pending_edit: Option<PendingEdit>,
}

impl<V: View> ViewController<V> {
    /// Takes ownership of both ends and pushes the startup snapshot.
    pub fn new(store: BudgetStore, view: V) -> Self {
        let mut controller = Self {
            store,
            view,
            pending_edit: None,
        };
        controller.publish();
        controller
    }

    pub fn store(&self) -> &BudgetStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        compute_snapshot(self.store.state())
    }

    /// Index of the record currently open for editing, if any.
    pub fn pending_edit(&self) -> Option<usize> {
        self.pending_edit.map(|p| p.index)
    }

    pub fn on_add(&mut self, item: &str, amount: &str, category: &str) -> StoreResult<()> {
        let result = self.store.add_expense(item, amount, category);
        self.settle(result)
    }

    /// Open `index` for editing. A second open replaces the first.
    pub fn on_edit_open(&mut self, index: usize) -> Option<EditPrefill> {
        let expense = self.store.state().get(index).ok()?;
        self.pending_edit = Some(PendingEdit {
            index,
            id: expense.id,
        });
        Some(EditPrefill {
            index,
            item: expense.item.clone(),
            amount: expense.amount.normalize().to_string(),
            category: expense.category.clone(),
        })
    }

    /// Save an edit. The pending edit is closed whether or not this succeeds.
    pub fn on_edit_save(
        &mut self,
        index: usize,
        item: &str,
        amount: &str,
        category: &str,
    ) -> StoreResult<()> {
        if let Some(pending) = self.pending_edit.take() {
            let moved = self
                .store
                .state()
                .get(index)
                .is_ok_and(|e| pending.index == index && e.id != pending.id);
            if moved {
                tracing::debug!(index, "edit target changed since open");
                return Err(ValidationError::StaleEdit { index }.into());
            }
        }
        let result = self.store.edit_expense(index, item, amount, category);
        self.settle(result)
    }

    pub fn on_edit_cancel(&mut self) {
        self.pending_edit = None;
    }

    pub fn on_delete(&mut self, index: usize) -> StoreResult<()> {
        let result = self.store.delete_expense(index);
        self.settle(result)
    }

    pub fn on_set_limit(&mut self, new_limit: &str) -> StoreResult<()> {
        let result = self.store.set_limit(new_limit);
        self.settle(result)
    }

    /// Republish unless the store rejected the input outright.
    fn settle(&mut self, result: StoreResult<()>) -> StoreResult<()> {
        match &result {
            Err(e) if e.is_validation() => {
                tracing::debug!("rejected: {e}");
            }
            _ => self.publish(),
        }
        result
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.view.show(snapshot);
    }
}

#[cfg(test)]
mod tests;
