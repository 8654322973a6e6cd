use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bulk::{BulkLogic, LineOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::Read;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bulk { file } = cmd {
        //
        // 1. Read input (file or stdin)
        //
        let input = match file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        //
        // 2. Upsert line by line
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let report = BulkLogic::apply(&mut pool, &input)?;

        //
        // 3. Per-line outcome report
        //
        for (lineno, outcome) in &report.lines {
            match outcome {
                LineOutcome::Upserted { date } => {
                    println!("line {:>3}: ok       {}", lineno, date)
                }
                LineOutcome::SkippedFields => {
                    println!("line {:>3}: skipped  fewer than three fields", lineno)
                }
                LineOutcome::SkippedDate { raw } => {
                    println!("line {:>3}: skipped  bad date '{}'", lineno, raw)
                }
                LineOutcome::SkippedNumber { raw } => {
                    println!("line {:>3}: skipped  bad number '{}'", lineno, raw)
                }
                LineOutcome::Failed { message } => {
                    println!("line {:>3}: FAILED   {}", lineno, message)
                }
                LineOutcome::Blank => {}
            }
        }

        //
        // 4. Summary
        //
        if report.lines.is_empty() {
            info("Bulk input was empty.");
        } else if report.failed() > 0 || report.skipped() > 0 {
            warning(format!(
                "Bulk upload finished: {} upserted, {} skipped, {} failed.",
                report.upserted(),
                report.skipped(),
                report.failed()
            ));
        } else {
            success(format!(
                "Bulk upload finished: {} result(s) upserted.",
                report.upserted()
            ));
        }
    }

    Ok(())
}
