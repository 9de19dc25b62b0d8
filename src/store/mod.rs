use rust_decimal::Decimal;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::models::{parse_limit, AppState, Expense, ExpenseDraft};

/// Owns the budget state and is the only thing that touches the data file.
///
/// Every successful mutation is followed by a full rewrite of the file.
/// If that write fails the in-memory state is still the new one; the error
/// tells the caller the change is not durable yet.
#[derive(Debug)]
pub struct BudgetStore {
    path: PathBuf,
    state: AppState,
}

impl BudgetStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Self::load(&path);
        Self { path, state }
    }

    /// Read the data file, falling back to an empty state when it is
    /// missing, unreadable or not the expected shape. Out-of-range values
    /// that parse fine are repaired (see `AppState::repair`).
    pub fn load(path: &Path) -> AppState {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no data file at {}, starting empty", path.display());
                return AppState::default();
            }
            Err(e) => {
                tracing::warn!("could not read {}: {e}; starting empty", path.display());
                return AppState::default();
            }
        };
        match serde_json::from_str::<AppState>(&raw) {
            Ok(mut state) => {
                let fixed = state.repair();
                if fixed > 0 {
                    tracing::warn!("repaired {fixed} invalid entries in {}", path.display());
                }
                tracing::info!(
                    "loaded {} expenses from {}",
                    state.expenses.len(),
                    path.display()
                );
                state
            }
            Err(e) => {
                tracing::warn!("ignoring malformed data file {}: {e}", path.display());
                AppState::default()
            }
        }
    }

    /// Replace the data file with the current state.
    ///
    /// The JSON is written to a sibling temp file which is then renamed over
    /// the target, so a reader sees either the old file or the new one.
    pub fn save(&self) -> StoreResult<()> {
        write_atomic(&self.path, &self.state).inspect_err(|e| {
            tracing::error!("save failed: {e}");
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_expense(&mut self, item: &str, amount: &str, category: &str) -> StoreResult<()> {
        let draft = ExpenseDraft::parse(item, amount, category)?;
        let expense = Expense::new(draft);
        tracing::debug!(item = %expense.item, amount = %expense.amount, "add expense");
        self.state.push_front(expense);
        self.save()
    }

    pub fn edit_expense(
        &mut self,
        index: usize,
        item: &str,
        amount: &str,
        category: &str,
    ) -> StoreResult<()> {
        self.state.get(index)?;
        let draft = ExpenseDraft::parse(item, amount, category)?;
        tracing::debug!(index, item = %draft.item, amount = %draft.amount, "edit expense");
        self.state.replace(index, draft)?;
        self.save()
    }

    pub fn delete_expense(&mut self, index: usize) -> StoreResult<()> {
        let removed = self.state.remove(index)?;
        tracing::debug!(index, item = %removed.item, "delete expense");
        self.save()
    }

    pub fn set_limit(&mut self, raw: &str) -> StoreResult<()> {
        let limit: Decimal = parse_limit(raw)?;
        tracing::debug!(%limit, "set limit");
        self.state.limit = limit;
        self.save()
    }
}

fn write_atomic(path: &Path, state: &AppState) -> StoreResult<()> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let json = to_json(state)?;
    let tmp = path.with_extension("json.tmp");
    let written = fs::File::create(&tmp).and_then(|mut file| {
        file.write_all(json.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    tracing::info!(
        "saved {} expenses to {}",
        state.expenses.len(),
        path.display()
    );
    Ok(())
}

/// Pretty JSON with four-space indentation.
fn to_json(state: &AppState) -> StoreResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(state, &mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
