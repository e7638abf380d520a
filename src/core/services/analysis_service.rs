use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{sum_amounts, ExpenseCategory, ExpenseRecord};

use super::SummaryService;

const MONTH_KEY_FORMAT: &str = "%Y-%m";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: ExpenseCategory,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateSpend {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Spending breakdown behind the analysis page and its workbook export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysis {
    pub total_amount: f64,
    pub category_wise: BTreeMap<ExpenseCategory, f64>,
    pub date_wise: BTreeMap<NaiveDate, f64>,
    /// Keyed by `YYYY-MM`.
    pub monthly_wise: BTreeMap<String, f64>,
    pub highest_category: Option<CategorySpend>,
    pub lowest_category: Option<CategorySpend>,
    pub highest_date: Option<DateSpend>,
    pub lowest_date: Option<DateSpend>,
}

pub struct AnalysisService;

impl AnalysisService {
    pub fn analyze(records: &[ExpenseRecord]) -> ExpenseAnalysis {
        let totals = SummaryService::compute_totals(records);

        let mut monthly_wise = BTreeMap::new();
        for record in records {
            let month = record.date.format(MONTH_KEY_FORMAT).to_string();
            *monthly_wise.entry(month).or_insert(0.0) += record.amount;
        }

        let category_extremes = extremes(&totals.category_totals);
        let date_extremes = extremes(&totals.date_totals);

        ExpenseAnalysis {
            total_amount: sum_amounts(records),
            highest_category: category_extremes
                .map(|((category, amount), _)| CategorySpend { category, amount }),
            lowest_category: category_extremes
                .map(|(_, (category, amount))| CategorySpend { category, amount }),
            highest_date: date_extremes.map(|((date, amount), _)| DateSpend { date, amount }),
            lowest_date: date_extremes.map(|(_, (date, amount))| DateSpend { date, amount }),
            category_wise: totals.category_totals,
            date_wise: totals.date_totals,
            monthly_wise,
        }
    }
}

/// Highest and lowest entries; ties keep the earliest key.
fn extremes<K: Copy>(map: &BTreeMap<K, f64>) -> Option<((K, f64), (K, f64))> {
    let mut entries = map.iter().map(|(key, amount)| (*key, *amount));
    let first = entries.next()?;
    Some(entries.fold((first, first), |(high, low), entry| {
        let high = if entry.1 > high.1 { entry } else { high };
        let low = if entry.1 < low.1 { entry } else { low };
        (high, low)
    }))
}
