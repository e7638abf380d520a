use std::{env, path::PathBuf, process};

use chrono::Utc;
use serde_json::json;

use expense_core::{
    config::{ConfigManager, ADD_EXPENSE_PATH, UPDATE_STATUS_PATH},
    currency::{format_currency_value, FormatOptions},
    domain::Displayable,
    init,
    report::{analysis_sheets, expenses_sheet, write_sheets},
    utils::persistence,
    AnalysisService, DraftService, ExpenseId, SettlementService, SummaryService,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| usage_exit());

    match command.as_str() {
        "totals" => {
            let path = next_path(&mut args);
            let records = persistence::load_snapshot_from_file(&path)?;
            let totals = SummaryService::compute_totals(&records);
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        "analyze" => {
            let path = next_path(&mut args);
            let records = persistence::load_snapshot_from_file(&path)?;
            let analysis = AnalysisService::analyze(&records);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        "summary" => {
            let path = next_path(&mut args);
            let records = persistence::load_snapshot_from_file(&path)?;
            let config = ConfigManager::new()?.load()?;
            let code = config.currency_code();
            let locale = config.locale_config();
            let options = FormatOptions::default();
            let totals = SummaryService::compute_totals(&records);
            let money = |amount: f64| format_currency_value(amount, &code, &locale, &options);

            println!("Expenses: {}", records.len());
            println!("Total spent: {}", money(totals.total_spent));
            println!("Total to be received: {}", money(totals.total_outstanding));
            for (category, amount) in &totals.category_totals {
                println!("  {:<14} {}", category, money(*amount));
            }
            for record in &records {
                for share in record.split_details.iter() {
                    if record.is_receivable(share) {
                        println!(
                            "Pending: {} owes {} for {}",
                            share.name,
                            money(share.share),
                            record.display_label()
                        );
                    }
                }
            }
        }
        "toggle" => {
            let path = next_path(&mut args);
            let expense_id = ExpenseId::new(args.next().unwrap_or_else(|| usage_exit()));
            let index: usize = args.next().unwrap_or_else(|| usage_exit()).parse()?;
            let records = persistence::load_snapshot_from_file(&path)?;
            let outcome = SettlementService::toggle_with_update(&records, &expense_id, index)?;

            // The snapshot is rewritten only once the request is ready to print.
            let config = ConfigManager::new()?.load()?;
            let request = json!({
                "method": "PUT",
                "url": config.endpoint(UPDATE_STATUS_PATH),
                "body": outcome.update,
            });
            let rendered = serde_json::to_string_pretty(&request)?;

            persistence::save_snapshot_to_file(&outcome.records, &path)?;
            println!("{rendered}");
        }
        "report" => {
            let path = next_path(&mut args);
            let out_dir = next_path(&mut args);
            let records = persistence::load_snapshot_from_file(&path)?;
            let mut sheets = analysis_sheets(&AnalysisService::analyze(&records));
            sheets.push(expenses_sheet(&records));
            for written in write_sheets(&out_dir, &sheets)? {
                println!("{}", written.display());
            }
        }
        "draft" => {
            let amount = args.next().unwrap_or_else(|| usage_exit());
            let category = args.next().unwrap_or_else(|| usage_exit());
            let description = args.next().unwrap_or_default();
            let split_with = args.next().unwrap_or_default();
            let draft =
                DraftService::from_form(&amount, &category, &description, &split_with, Utc::now())?;

            let config = ConfigManager::new()?.load()?;
            let request = json!({
                "method": "POST",
                "url": config.endpoint(ADD_EXPENSE_PATH),
                "body": draft,
            });
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        "version" => {
            println!(
                "expense_core {} ({}, built {}, {})",
                env!("CARGO_PKG_VERSION"),
                env!("EXPENSE_CORE_BUILD_HASH"),
                env!("EXPENSE_CORE_BUILD_TIMESTAMP"),
                env!("EXPENSE_CORE_BUILD_PROFILE"),
            );
        }
        _ => usage_exit(),
    }

    Ok(())
}

fn next_path(args: &mut impl Iterator<Item = String>) -> PathBuf {
    args.next().map(PathBuf::from).unwrap_or_else(|| usage_exit())
}

fn usage_exit() -> ! {
    eprintln!(
        "Usage: expense_core_cli <command>\n\
         Commands:\n  \
         totals <snapshot.json>\n  \
         analyze <snapshot.json>\n  \
         summary <snapshot.json>\n  \
         toggle <snapshot.json> <expense-id> <share-index>\n  \
         report <snapshot.json> <out-dir>\n  \
         draft <amount> <category> [description] [split-with]\n  \
         version"
    );
    process::exit(1);
}
