use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::validation::validate_records;
use crate::domain::{ExpenseCategory, ExpenseRecord};

use super::ServiceResult;

/// Derived view state for a snapshot of expense records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    pub total_spent: f64,
    /// Unpaid shares owed to record owners by other participants.
    pub total_outstanding: f64,
    pub category_totals: BTreeMap<ExpenseCategory, f64>,
    pub date_totals: BTreeMap<NaiveDate, f64>,
}

pub struct SummaryService;

impl SummaryService {
    /// Aggregates a snapshot in input order. Only categories and dates that occur
    /// in `records` get an entry.
    pub fn compute_totals(records: &[ExpenseRecord]) -> ExpenseTotals {
        let mut totals = ExpenseTotals::default();
        for record in records {
            totals.total_spent += record.amount;
            for share in &record.split_details {
                if record.is_receivable(share) {
                    totals.total_outstanding += share.share;
                }
            }
            *totals.category_totals.entry(record.category).or_insert(0.0) += record.amount;
            *totals
                .date_totals
                .entry(record.calendar_date())
                .or_insert(0.0) += record.amount;
        }
        tracing::debug!(
            records = records.len(),
            total_spent = totals.total_spent,
            total_outstanding = totals.total_outstanding,
            "computed expense totals"
        );
        totals
    }

    /// Same as [`SummaryService::compute_totals`] but refuses snapshots containing
    /// records that would corrupt the sums.
    pub fn checked_totals(records: &[ExpenseRecord]) -> ServiceResult<ExpenseTotals> {
        validate_records(records)?;
        Ok(Self::compute_totals(records))
    }
}
