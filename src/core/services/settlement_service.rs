//! Paid/unpaid transitions for split shares.
//!
//! Every operation borrows the snapshot immutably and returns a fresh copy, so a
//! caller can apply the result optimistically and still diff against (or fall
//! back to) the snapshot it started from.

use crate::domain::{ExpenseId, ExpenseRecord, Identifiable, StatusUpdate};
use crate::errors::ExpenseError;

use super::ServiceResult;

/// New snapshot plus the body to send to `PUT /expenses/update-status`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub records: Vec<ExpenseRecord>,
    pub update: StatusUpdate,
}

pub struct SettlementService;

impl SettlementService {
    /// Flips `has_paid` on one share. Toggling twice with the same arguments
    /// restores the original snapshot.
    pub fn toggle_share_paid(
        records: &[ExpenseRecord],
        expense_id: &ExpenseId,
        share_index: usize,
    ) -> ServiceResult<Vec<ExpenseRecord>> {
        Self::toggle_with_update(records, expense_id, share_index).map(|outcome| outcome.records)
    }

    pub fn toggle_with_update(
        records: &[ExpenseRecord],
        expense_id: &ExpenseId,
        share_index: usize,
    ) -> ServiceResult<ToggleOutcome> {
        let position = locate_share(records, expense_id, share_index)?;
        let mut updated = records.to_vec();
        let share = &mut updated[position].split_details[share_index];
        share.has_paid = !share.has_paid;
        let update = StatusUpdate {
            expense_id: expense_id.clone(),
            detail_index: share_index,
            has_paid: share.has_paid,
        };
        tracing::debug!(
            expense_id = %expense_id,
            share_index,
            has_paid = update.has_paid,
            "toggled split share"
        );
        Ok(ToggleOutcome {
            records: updated,
            update,
        })
    }

    /// Sets a share to the flag carried by `update`. Applying the same update
    /// twice is a no-op, which makes it the tool for reconciling with the server
    /// or undoing an optimistic toggle whose request failed.
    pub fn apply_status_update(
        records: &[ExpenseRecord],
        update: &StatusUpdate,
    ) -> ServiceResult<Vec<ExpenseRecord>> {
        let position = locate_share(records, &update.expense_id, update.detail_index)?;
        let mut updated = records.to_vec();
        updated[position].split_details[update.detail_index].has_paid = update.has_paid;
        Ok(updated)
    }
}

/// Index of the single record carrying `expense_id`, after checking that
/// `share_index` exists on it.
fn locate_share(
    records: &[ExpenseRecord],
    expense_id: &ExpenseId,
    share_index: usize,
) -> ServiceResult<usize> {
    let mut matches = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.id() == expense_id)
        .map(|(position, _)| position);

    let position = match matches.next() {
        Some(position) => position,
        None => {
            tracing::warn!(expense_id = %expense_id, "expense not found in snapshot");
            return Err(ExpenseError::NotFound(expense_id.clone()));
        }
    };
    if matches.next().is_some() {
        return Err(ExpenseError::Validation(format!(
            "expense id {} appears more than once in the snapshot",
            expense_id
        )));
    }

    let record = &records[position];
    if record.share(share_index).is_none() {
        let len = record.split_details.len();
        tracing::warn!(expense_id = %expense_id, share_index, len, "split index out of range");
        return Err(ExpenseError::IndexOutOfRange {
            expense_id: expense_id.clone(),
            index: share_index,
            len,
        });
    }
    Ok(position)
}
