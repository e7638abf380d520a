pub mod category;
pub mod common;
pub mod expense;
pub mod payload;

pub use category::ExpenseCategory;
pub use common::{sum_amounts, Amounted, Displayable, Identifiable};
pub use expense::{ExpenseId, ExpenseRecord, SplitShare};
pub use payload::{ExpenseEnvelope, NewExpense, SplitWithEntry, StatusUpdate};
