// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_all_results, load_results_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ResultExport;
use crate::export::range::parse_range;
use crate::ui::messages::{success, warning};
use crate::utils::table::join_numbers;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export pipeline for published results.
pub struct ExportLogic;

impl ExportLogic {
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period/interval expression
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let results = load_exports(pool, date_bounds)?;

        if results.is_empty() {
            warning("⚠️  No results found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&results, path)?,
            ExportFormat::Json => export_json(&results, path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        Ok(())
    }
}

/// Load and flatten the rows for the selected bounds.
fn load_exports(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ResultExport>> {
    let rows = match bounds {
        None => load_all_results(&pool.conn)?,
        Some((start, end)) => load_results_between(&pool.conn, start, end)?,
    };

    Ok(rows
        .iter()
        .map(|row| {
            let res = row.normalized();
            ResultExport {
                date: res.date_str(),
                first_round: join_numbers(&res.first_round),
                second_round: join_numbers(&res.second_round),
                created_at: row.created_at.clone(),
            }
        })
        .collect())
}
