use std::{fs, path::Path};

use serde_json::Value;

use crate::{
    core::{utils::write_atomic, validation::validate_records},
    domain::{ExpenseEnvelope, ExpenseRecord},
    errors::{ExpenseError, ExpenseResult},
};

/// Parses a fetched snapshot, accepting either the `{ "expenses": [...] }`
/// envelope or a bare array, and validates every record.
pub fn parse_snapshot(json: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Object(mut object) => match object.remove("expenses") {
            Some(items) => items,
            None => {
                return Err(ExpenseError::Validation(
                    "snapshot object has no `expenses` field".into(),
                ))
            }
        },
        items @ Value::Array(_) => items,
        _ => {
            return Err(ExpenseError::Validation(
                "snapshot must be an object or an array".into(),
            ))
        }
    };
    let records: Vec<ExpenseRecord> = serde_json::from_value(items)
        .map_err(|err| ExpenseError::Validation(format!("malformed expense record: {err}")))?;
    validate_records(&records)?;
    tracing::debug!(records = records.len(), "parsed expense snapshot");
    Ok(records)
}

/// Loads and validates a snapshot file.
pub fn load_snapshot_from_file(path: &Path) -> ExpenseResult<Vec<ExpenseRecord>> {
    let data = fs::read_to_string(path)?;
    parse_snapshot(&data)
}

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_file(records: &[ExpenseRecord], path: &Path) -> ExpenseResult<()> {
    let envelope = ExpenseEnvelope::new(records.to_vec());
    let json = serde_json::to_string_pretty(&envelope)?;
    write_atomic(path, &json)?;
    Ok(())
}
