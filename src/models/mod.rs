mod category;
mod expense;
mod state;

pub use category::Category;
pub use expense::{parse_limit, Expense, ExpenseDraft};
pub use state::AppState;
