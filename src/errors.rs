use thiserror::Error;

use crate::domain::expense::ExpenseId;

pub type ExpenseResult<T> = Result<T, ExpenseError>;

/// Error type shared by the aggregation, settlement, and ingestion layers.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),
    #[error("Split index {index} out of range for expense {expense_id} ({len} shares)")]
    IndexOutOfRange {
        expense_id: ExpenseId,
        index: usize,
        len: usize,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
