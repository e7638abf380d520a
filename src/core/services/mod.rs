pub mod analysis_service;
pub mod draft_service;
pub mod settlement_service;
pub mod summary_service;

pub use analysis_service::{AnalysisService, CategorySpend, DateSpend, ExpenseAnalysis};
pub use draft_service::DraftService;
pub use settlement_service::{SettlementService, ToggleOutcome};
pub use summary_service::{ExpenseTotals, SummaryService};

use crate::errors::ExpenseError;

pub type ServiceResult<T> = Result<T, ExpenseError>;
