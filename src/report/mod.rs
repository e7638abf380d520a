//! Tabular report sheets and their CSV serialization.
//!
//! Sheet names and column headers follow the analysis workbook the web client
//! offered for download; each sheet is written as its own CSV file.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{services::ExpenseAnalysis, utils::ensure_dir},
    domain::ExpenseRecord,
    errors::ExpenseResult,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSheet {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|header| header.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|cell| cell.to_string()).collect());
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

/// The five sheets of the analysis export, in workbook order.
pub fn analysis_sheets(analysis: &ExpenseAnalysis) -> Vec<ReportSheet> {
    let mut total = ReportSheet::new("TotalAmount", &["TotalAmountSpent"]);
    total.push_row([analysis.total_amount]);

    let mut categories = ReportSheet::new("CategoryWise", &["Category", "AmountSpent"]);
    for (category, amount) in &analysis.category_wise {
        categories.push_row([category.to_string(), amount.to_string()]);
    }

    let mut dates = ReportSheet::new("DateWise", &["Date", "AmountSpent"]);
    for (date, amount) in &analysis.date_wise {
        dates.push_row([date.to_string(), amount.to_string()]);
    }

    let mut months = ReportSheet::new("MonthlyWise", &["Month", "AmountSpent"]);
    for (month, amount) in &analysis.monthly_wise {
        months.push_row([month.clone(), amount.to_string()]);
    }

    let mut high_low = ReportSheet::new("HighLowSpending", &["Kind", "Rank", "Name", "Amount"]);
    let category_rows = [
        ("Highest", analysis.highest_category),
        ("Lowest", analysis.lowest_category),
    ];
    for (rank, spend) in category_rows {
        if let Some(spend) = spend {
            high_low.push_row([
                "Category".to_string(),
                rank.to_string(),
                spend.category.to_string(),
                spend.amount.to_string(),
            ]);
        }
    }
    let date_rows = [
        ("Highest", analysis.highest_date),
        ("Lowest", analysis.lowest_date),
    ];
    for (rank, spend) in date_rows {
        if let Some(spend) = spend {
            high_low.push_row([
                "Date".to_string(),
                rank.to_string(),
                spend.date.to_string(),
                spend.amount.to_string(),
            ]);
        }
    }

    vec![total, categories, dates, months, high_low]
}

/// One row per expense, in snapshot order.
pub fn expenses_sheet(records: &[ExpenseRecord]) -> ReportSheet {
    let mut sheet = ReportSheet::new(
        "expenses",
        &["Id", "Date", "Category", "Amount", "Description", "Outstanding"],
    );
    for record in records {
        sheet.push_row([
            record.id.to_string(),
            record.calendar_date().to_string(),
            record.category.to_string(),
            record.amount.to_string(),
            record.description.clone().unwrap_or_default(),
            record.outstanding().to_string(),
        ]);
    }
    sheet
}

/// Writes each sheet to `<dir>/<name>.csv`, returning the written paths.
pub fn write_sheets(dir: &Path, sheets: &[ReportSheet]) -> ExpenseResult<Vec<PathBuf>> {
    ensure_dir(dir)?;
    let mut written = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(sheet.file_name());
        let file = File::create(&path)?;
        sheet.write_csv(file)?;
        tracing::info!(path = %path.display(), rows = sheet.rows.len(), "wrote report sheet");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::AnalysisService;
    use crate::domain::{ExpenseCategory, SplitShare};
    use chrono::{TimeZone, Utc};

    fn records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(
                "e1",
                100.0,
                ExpenseCategory::Food,
                Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
                "u1",
            )
            .with_description("Dinner, with friends")
            .with_share(SplitShare::new("A", 50.0).with_user_id("u2")),
            ExpenseRecord::new(
                "e2",
                40.0,
                ExpenseCategory::Travel,
                Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
                "u1",
            ),
        ]
    }

    fn to_csv(sheet: &ReportSheet) -> String {
        let mut buffer = Vec::new();
        sheet.write_csv(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn analysis_sheets_follow_workbook_layout() {
        let sheets = analysis_sheets(&AnalysisService::analyze(&records()));
        let names: Vec<&str> = sheets.iter().map(|sheet| sheet.name.as_str()).collect();
        assert_eq!(
            names,
            ["TotalAmount", "CategoryWise", "DateWise", "MonthlyWise", "HighLowSpending"]
        );
        assert_eq!(to_csv(&sheets[0]), "TotalAmountSpent\n140\n");
        assert_eq!(to_csv(&sheets[1]), "Category,AmountSpent\nFood,100\nTravel,40\n");
        assert_eq!(sheets[4].rows.len(), 4);
        assert_eq!(sheets[4].rows[0], ["Category", "Highest", "Food", "100"]);
    }

    #[test]
    fn empty_analysis_has_no_high_low_rows() {
        let sheets = analysis_sheets(&AnalysisService::analyze(&[]));
        assert!(sheets[4].rows.is_empty());
        assert_eq!(to_csv(&sheets[0]), "TotalAmountSpent\n0\n");
    }

    #[test]
    fn expenses_sheet_quotes_descriptions() {
        let csv = to_csv(&expenses_sheet(&records()));
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Id,Date,Category,Amount,Description,Outstanding")
        );
        assert_eq!(
            lines.next(),
            Some("e1,2024-01-01,Food,100,\"Dinner, with friends\",50")
        );
        assert_eq!(lines.next(), Some("e2,2024-01-02,Travel,40,,0"));
    }

    #[test]
    fn write_sheets_creates_one_file_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let paths = write_sheets(&out, &[expenses_sheet(&records())]).unwrap();
        assert_eq!(paths, vec![out.join("expenses.csv")]);
        assert!(paths[0].exists());
    }
}
