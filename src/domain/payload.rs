//! Request and response bodies exchanged with the expenses REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{category::ExpenseCategory, expense::ExpenseId, expense::ExpenseRecord};

/// Body of `GET /expenses/fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEnvelope {
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl ExpenseEnvelope {
    pub fn new(expenses: Vec<ExpenseRecord>) -> Self {
        Self { expenses }
    }
}

/// Body of `PUT /expenses/update-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub expense_id: ExpenseId,
    pub detail_index: usize,
    pub has_paid: bool,
}

/// Body of `POST /expenses/add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    #[serde(with = "epoch_millis")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub split_with: Vec<SplitWithEntry>,
}

/// A participant named on the add form; the server resolves the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitWithEntry {
    pub name: String,
}

mod epoch_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::domain::expense::wire_date;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(date.timestamp_millis())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        wire_date::from_millis(millis)
            .ok_or_else(|| de::Error::custom(format!("timestamp {millis} out of range")))
    }
}
