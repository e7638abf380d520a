#![allow(dead_code)]

use std::{fs, path::PathBuf};

use chrono::{TimeZone, Utc};
use expense_core::{ExpenseCategory, ExpenseRecord, SplitShare};
use tempfile::TempDir;

/// The shared-dinner snapshot: one Food expense split between a friend and the owner.
pub const SNAPSHOT_JSON: &str = r#"{
  "expenses": [
    {
      "_id": "e1",
      "amount": 100,
      "category": "Food",
      "date": "2024-01-01T19:45:00.000Z",
      "description": "Dinner",
      "userId": "u1",
      "splitDetails": [
        { "name": "A", "share": 50, "hasPaid": false, "userId": "u2" },
        { "name": "u1", "share": 50, "hasPaid": false, "userId": "u1" }
      ]
    },
    {
      "_id": "e2",
      "amount": 60,
      "category": "Travel",
      "date": "2024-01-01T08:00:00.000Z",
      "userId": "u1",
      "splitDetails": []
    }
  ]
}"#;

pub fn record(id: &str, amount: f64, category: ExpenseCategory, day: u32) -> ExpenseRecord {
    ExpenseRecord::new(
        id,
        amount,
        category,
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        "u1",
    )
}

pub fn shared_dinner() -> ExpenseRecord {
    record("e1", 100.0, ExpenseCategory::Food, 1)
        .with_share(SplitShare::new("A", 50.0).with_user_id("u2"))
        .with_share(SplitShare::new("u1", 50.0).with_user_id("u1"))
}

/// Writes [`SNAPSHOT_JSON`] into a fresh temp dir; keep the guard alive for the test.
pub fn snapshot_file() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT_JSON).expect("write snapshot");
    (temp, path)
}
