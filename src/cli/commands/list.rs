use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_results, load_results_between};
use crate::errors::{AppError, AppResult};
use crate::models::daily_result::ResultRow;
use crate::utils::date;
use crate::utils::table::{Column, Table, join_numbers};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let rows = match resolve_period(period)? {
            None => load_all_results(&pool.conn)?,
            Some((start, end)) => load_results_between(&pool.conn, start, end)?,
        };

        if rows.is_empty() {
            println!("No results for the selected period.");
            return Ok(());
        }

        print_results(&rows);
    }
    Ok(())
}

/// `None` means the whole archive.
fn resolve_period(
    period: &Option<String>,
) -> AppResult<Option<(chrono::NaiveDate, chrono::NaiveDate)>> {
    let dates = if let Some(p) = period {
        if p == "all" {
            return Ok(None);
        }

        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate)?
            } else {
                return Err(AppError::InvalidDate(p.clone()));
            }
        } else {
            date::generate_from_period(p).map_err(AppError::InvalidDate)?
        }
    } else {
        date::current_month_dates().map_err(AppError::InvalidDate)?
    };

    // generate_* always yields at least one day
    Ok(Some((*dates.first().unwrap(), *dates.last().unwrap())))
}

fn print_results(rows: &[ResultRow]) {
    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("First Round", 16),
        Column::new("Second Round", 16),
    ]);

    for row in rows {
        let res = row.normalized();
        table.add_row(vec![
            res.date_str(),
            join_numbers(&res.first_round),
            join_numbers(&res.second_round),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} result(s).", rows.len());
}
