use rust_decimal::Decimal;

use crate::controller::EditPrefill;
use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    Add,
    Edit { index: usize },
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Item,
    Amount,
    Category,
    Limit,
}

impl Field {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Item => "Item Name",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Limit => "New Budget Amount",
        }
    }
}

const EXPENSE_FIELDS: &[Field] = &[Field::Item, Field::Amount, Field::Category];
const LIMIT_FIELDS: &[Field] = &[Field::Limit];

/// A modal input form. Values stay raw text until the controller parses them.
#[derive(Debug, Clone)]
pub(crate) struct Form {
    pub(crate) kind: FormKind,
    pub(crate) item: String,
    pub(crate) amount: String,
    pub(crate) category: Category,
    pub(crate) limit: String,
    pub(crate) focus: Field,
}

impl Form {
    pub(crate) fn add() -> Self {
        Self {
            kind: FormKind::Add,
            item: String::new(),
            amount: String::new(),
            category: Category::Food,
            limit: String::new(),
            focus: Field::Item,
        }
    }

    pub(crate) fn edit(prefill: EditPrefill) -> Self {
        Self {
            kind: FormKind::Edit {
                index: prefill.index,
            },
            item: prefill.item,
            amount: prefill.amount,
            category: prefill.category,
            limit: String::new(),
            focus: Field::Item,
        }
    }

    pub(crate) fn limit(current: Decimal) -> Self {
        Self {
            kind: FormKind::Limit,
            item: String::new(),
            amount: String::new(),
            category: Category::Food,
            limit: current.normalize().to_string(),
            focus: Field::Limit,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.kind {
            FormKind::Add => " Add New Expense ",
            FormKind::Edit { .. } => " Edit Transaction ",
            FormKind::Limit => " Set Monthly Budget ",
        }
    }

    pub(crate) fn fields(&self) -> &'static [Field] {
        match self.kind {
            FormKind::Limit => LIMIT_FIELDS,
            _ => EXPENSE_FIELDS,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.step_focus(1);
    }

    pub(crate) fn prev_field(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = fields[(pos + delta).rem_euclid(len) as usize];
    }

    /// Text of a field as shown on screen.
    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::Item => &self.item,
            Field::Amount => &self.amount,
            Field::Category => self.category.as_str(),
            Field::Limit => &self.limit,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Item => Some(&mut self.item),
            Field::Amount => Some(&mut self.amount),
            Field::Limit => Some(&mut self.limit),
            Field::Category => None,
        }
    }

    pub(crate) fn push(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub(crate) fn pop(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub(crate) fn cycle_category(&mut self, delta: isize) {
        if self.focus == Field::Category {
            self.category = self.category.cycle(delta);
        }
    }
}
