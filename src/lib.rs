#![doc(test(attr(deny(warnings))))]

//! Expense Core turns fetched expense snapshots into spend, outstanding, and
//! category/date aggregates, and models the paid/unpaid settlement of split
//! shares for expense-tracking clients.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod utils;

pub use crate::core::services::{
    AnalysisService, DraftService, ExpenseAnalysis, ExpenseTotals, SettlementService,
    SummaryService, ToggleOutcome,
};
pub use domain::{ExpenseCategory, ExpenseId, ExpenseRecord, SplitShare, StatusUpdate};
pub use errors::{ExpenseError, ExpenseResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
