use crate::controller::{DisplaySnapshot, ViewController};
use crate::error::{StoreError, ValidationError};
use crate::store::BudgetStore;

use super::dashboard::Dashboard;
use super::form::{Form, FormKind};
use super::theme::ThemeMode;
use super::util::{clamp_cursor, scroll_to_top};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "INPUT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) theme: ThemeMode,

    pub(crate) controller: ViewController<Dashboard>,

    // Expense list
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    pub(crate) form: Option<Form>,

    // Confirmation
    pub(crate) pending_delete: Option<usize>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: BudgetStore) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,
            theme: ThemeMode::Light,

            controller: ViewController::new(store, Dashboard::default()),

            expense_index: 0,
            expense_scroll: 0,

            form: None,

            pending_delete: None,
            confirm_message: String::new(),

            visible_rows: 10,
        }
    }

    pub(crate) fn snapshot(&self) -> &DisplaySnapshot {
        &self.controller.view().snapshot
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    // ── Forms ─────────────────────────────────────────────────

    pub(crate) fn open_add(&mut self) {
        self.open_form(Form::add());
    }

    pub(crate) fn open_limit(&mut self) {
        let current = self.controller.store().state().limit;
        self.open_form(Form::limit(current));
    }

    pub(crate) fn open_edit(&mut self) {
        match self.controller.on_edit_open(self.expense_index) {
            Some(prefill) => self.open_form(Form::edit(prefill)),
            None => self.set_status("Nothing to edit"),
        }
    }

    fn open_form(&mut self, form: Form) {
        self.form = Some(form);
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn cancel_form(&mut self) {
        if let Some(form) = self.form.take() {
            if matches!(form.kind, FormKind::Edit { .. }) {
                self.controller.on_edit_cancel();
            }
        }
        self.input_mode = InputMode::Normal;
        self.set_status("Cancelled");
    }

    /// Hand the form to the controller. Invalid input keeps the form open.
    pub(crate) fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let kind = form.kind;
        let category = form.category.as_str();
        let (result, done) = match kind {
            FormKind::Add => (
                self.controller.on_add(&form.item, &form.amount, category),
                format!("Added: {}", form.item.trim()),
            ),
            FormKind::Edit { index } => (
                self.controller
                    .on_edit_save(index, &form.item, &form.amount, category),
                format!("Updated: {}", form.item.trim()),
            ),
            FormKind::Limit => (
                self.controller.on_set_limit(&form.limit),
                "Budget updated".to_string(),
            ),
        };

        match result {
            Ok(()) => {
                self.close_form();
                if kind == FormKind::Add {
                    // New expenses land at the top.
                    scroll_to_top(&mut self.expense_index, &mut self.expense_scroll);
                }
                self.after_change();
                self.set_status(done);
            }
            Err(StoreError::Invalid(ValidationError::StaleEdit { .. })) => {
                self.close_form();
                self.set_status("That expense changed; reopen it to edit");
            }
            Err(StoreError::Invalid(e)) => {
                // The failed save closed the pending edit; re-arm it so the
                // corrected form still targets the same record.
                if let FormKind::Edit { index } = kind {
                    self.controller.on_edit_open(index);
                }
                self.set_status(format!("Invalid input: {e}"));
            }
            Err(e) => {
                self.close_form();
                self.after_change();
                self.set_status(format!("Not saved: {e}"));
            }
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    // ── Delete ────────────────────────────────────────────────

    pub(crate) fn request_delete(&mut self) {
        let target = self
            .snapshot()
            .expenses
            .get(self.expense_index)
            .map(|row| (row.index, format!("Delete '{}' ({})?", row.item, row.amount_display)));
        let Some((index, message)) = target else {
            self.set_status("Nothing to delete");
            return;
        };
        self.confirm_message = message;
        self.pending_delete = Some(index);
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_delete(&mut self) {
        if let Some(index) = self.pending_delete.take() {
            match self.controller.on_delete(index) {
                Ok(()) => self.set_status("Deleted"),
                Err(e) if e.is_validation() => self.set_status(format!("Not deleted: {e}")),
                Err(e) => self.set_status(format!("Not saved: {e}")),
            }
            self.after_change();
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    /// Keep the cursor on a real row after the list changed.
    fn after_change(&mut self) {
        let len = self.snapshot().expenses.len();
        clamp_cursor(&mut self.expense_index, &mut self.expense_scroll, len);
    }
}
