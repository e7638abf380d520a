//! Ingestion checks that keep corrupt records out of aggregate sums.

use crate::{
    domain::ExpenseRecord,
    errors::{ExpenseError, ExpenseResult},
};

pub(crate) fn check_amount(value: f64, what: impl FnOnce() -> String) -> ExpenseResult<()> {
    if !value.is_finite() {
        return Err(ExpenseError::Validation(format!("{} is not a finite number", what())));
    }
    if value < 0.0 {
        return Err(ExpenseError::Validation(format!(
            "{} must not be negative (got {})",
            what(),
            value
        )));
    }
    Ok(())
}

/// Rejects a record whose amounts or identifiers cannot be aggregated safely.
///
/// The sum of split shares is deliberately left unchecked against `amount`.
pub fn validate_record(record: &ExpenseRecord) -> ExpenseResult<()> {
    if record.id.is_blank() {
        return Err(ExpenseError::Validation("expense id must not be empty".into()));
    }
    if record.owner_id.trim().is_empty() {
        return Err(ExpenseError::Validation(format!(
            "expense {} has no owner",
            record.id
        )));
    }
    check_amount(record.amount, || format!("amount of expense {}", record.id))?;
    for (index, share) in record.split_details.iter().enumerate() {
        check_amount(share.share, || {
            format!("share {} of expense {}", index, record.id)
        })?;
    }
    Ok(())
}

/// Validates every record, stopping at the first failure.
pub fn validate_records(records: &[ExpenseRecord]) -> ExpenseResult<()> {
    for record in records {
        if let Err(err) = validate_record(record) {
            tracing::warn!(expense_id = %record.id, error = %err, "rejecting expense record");
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExpenseCategory, SplitShare};
    use chrono::{TimeZone, Utc};

    fn record(amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(
            "e1",
            amount,
            ExpenseCategory::Travel,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            "u1",
        )
    }

    #[test]
    fn accepts_zero_amounts_and_unbalanced_shares() {
        let record = record(0.0).with_share(SplitShare::new("A", 75.0));
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn rejects_negative_amount() {
        let err = validate_record(&record(-1.0)).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn rejects_nan_share_with_its_index() {
        let record = record(10.0)
            .with_share(SplitShare::new("A", 5.0))
            .with_share(SplitShare::new("B", f64::NAN));
        let err = validate_record(&record).unwrap_err();
        assert!(err.to_string().contains("share 1 of expense e1"), "{err}");
    }

    #[test]
    fn rejects_blank_identifiers() {
        let mut blank_id = record(1.0);
        blank_id.id = "  ".into();
        assert!(validate_record(&blank_id).is_err());

        let mut no_owner = record(1.0);
        no_owner.owner_id = String::new();
        assert!(validate_record(&no_owner).is_err());
    }

    #[test]
    fn validate_records_reports_first_failure() {
        let good = record(5.0);
        let mut bad = record(-3.0);
        bad.id = "e2".into();
        let err = validate_records(&[good, bad]).unwrap_err();
        assert!(err.to_string().contains("e2"));
    }
}
