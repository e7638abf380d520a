//! Turns raw add-expense form input into the body of `POST /expenses/add`.

use chrono::{DateTime, Utc};

use crate::core::validation::check_amount;
use crate::domain::{ExpenseCategory, NewExpense, SplitWithEntry};
use crate::errors::ExpenseError;

use super::ServiceResult;

pub struct DraftService;

impl DraftService {
    /// Builds a draft stamped with `now`. `split_with` is a comma-separated list
    /// of participant names; blank entries are dropped.
    pub fn from_form(
        amount: &str,
        category: &str,
        description: &str,
        split_with: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<NewExpense> {
        let trimmed = amount.trim();
        let amount: f64 = trimmed.parse().map_err(|_| {
            ExpenseError::Validation(format!("amount `{}` is not a number", trimmed))
        })?;
        check_amount(amount, || "amount".to_string())?;
        let category: ExpenseCategory = category.parse()?;

        Ok(NewExpense {
            amount,
            category,
            description: description.trim().to_string(),
            date: now,
            split_with: Self::parse_split_with(split_with),
        })
    }

    pub fn parse_split_with(raw: &str) -> Vec<SplitWithEntry> {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| SplitWithEntry {
                name: name.to_string(),
            })
            .collect()
    }
}
