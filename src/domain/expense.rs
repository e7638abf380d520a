//! Expense records and split shares as fetched from the expenses API.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    category::ExpenseCategory,
    common::{sum_amounts, Amounted, Displayable, Identifiable},
};

/// Opaque server-assigned identifier of an expense.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One logged spending event, optionally divided among participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseId,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(with = "wire_date")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "userId")]
    pub owner_id: String,
    #[serde(default)]
    pub split_details: Vec<SplitShare>,
}

impl ExpenseRecord {
    pub fn new(
        id: impl Into<ExpenseId>,
        amount: f64,
        category: ExpenseCategory,
        date: DateTime<Utc>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category,
            date,
            description: None,
            owner_id: owner_id.into(),
            split_details: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_share(mut self, share: SplitShare) -> Self {
        self.split_details.push(share);
        self
    }

    /// UTC calendar day the expense falls on; the time of day is discarded.
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn share(&self, index: usize) -> Option<&SplitShare> {
        self.split_details.get(index)
    }

    /// A share is receivable when it is unpaid and does not belong to the owner.
    pub fn is_receivable(&self, share: &SplitShare) -> bool {
        !share.has_paid && share.user_id.as_deref() != Some(self.owner_id.as_str())
    }

    /// Sum of receivable shares, in share order.
    pub fn outstanding(&self) -> f64 {
        sum_amounts(
            self.split_details
                .iter()
                .filter(|share| self.is_receivable(share)),
        )
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        match self.description.as_deref().filter(|text| !text.trim().is_empty()) {
            Some(text) => format!("{} on {} ({})", self.category, self.calendar_date(), text),
            None => format!("{} on {}", self.category, self.calendar_date()),
        }
    }
}

/// One participant's portion of an expense and whether they have settled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitShare {
    pub name: String,
    pub share: f64,
    #[serde(default)]
    pub has_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SplitShare {
    pub fn new(name: impl Into<String>, share: f64) -> Self {
        Self {
            name: name.into(),
            share,
            has_paid: false,
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_paid(mut self, has_paid: bool) -> Self {
        self.has_paid = has_paid;
        self
    }
}

impl Amounted for SplitShare {
    fn amount(&self) -> f64 {
        self.share
    }
}

impl Displayable for SplitShare {
    fn display_label(&self) -> String {
        let status = if self.has_paid { "Paid" } else { "Unpaid" };
        format!("{} ({})", self.name, status)
    }
}

/// Dates travel as RFC 3339 strings, bare `YYYY-MM-DD` days, or epoch milliseconds.
pub(crate) mod wire_date {
    use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawDate::deserialize(deserializer)? {
            RawDate::Millis(millis) => from_millis(millis)
                .ok_or_else(|| de::Error::custom(format!("timestamp {millis} out of range"))),
            RawDate::Text(text) => parse_text(&text)
                .ok_or_else(|| de::Error::custom(format!("unrecognised date `{text}`"))),
        }
    }

    pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(millis).single()
    }

    pub fn parse_text(text: &str) -> Option<DateTime<Utc>> {
        let trimmed = text.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(parsed.with_timezone(&Utc));
        }
        let day = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
        Some(Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0)?))
    }
}
