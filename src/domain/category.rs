//! The fixed set of expense categories offered by the add-expense form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// Classification attached to every expense record.
///
/// Variant order is the order the form lists them in and drives the ordering
/// of category aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Entertainment,
    Shopping,
    Utilities,
    Rent,
    Health,
    Others,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::Health,
        ExpenseCategory::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Others => "Others",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseError;

    /// Matches labels case-insensitively, ignoring surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "unknown category `{}` (expected one of {})",
                    trimmed,
                    ExpenseCategory::ALL
                        .iter()
                        .map(ExpenseCategory::label)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}
