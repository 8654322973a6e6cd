use crate::db::common::{get_common, load_common, set_common};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::common::CommonNumbers;
use crate::models::raw;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Logic for operator-curated common-number guesses.
pub struct CommonLogic;

fn parse_row(field: &str, label: &str) -> AppResult<Vec<i64>> {
    let parsed = raw::normalize(Some(field));
    if parsed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", label)));
    }
    raw::require_valid(&parsed)
        .map_err(|tok| AppError::Validation(format!("{} has a non-numeric value: '{}'", label, tok)))
}

impl CommonLogic {
    /// Set-by-key upsert; created_at survives updates.
    pub fn set(pool: &mut DbPool, date: NaiveDate, row1: &str, row2: &str) -> AppResult<()> {
        let row1 = parse_row(row1, "Row 1")?;
        let row2 = parse_row(row2, "Row 2")?;

        let numbers = CommonNumbers::new(date, row1, row2);
        set_common(&pool.conn, &numbers)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "common_set",
            &numbers.date_str(),
            &format!("Common numbers set for {}", numbers.date_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Common numbers set for {}.", numbers.date_str()));
        Ok(())
    }

    pub fn get(pool: &mut DbPool, date: NaiveDate) -> AppResult<Option<CommonNumbers>> {
        get_common(&pool.conn, date)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<CommonNumbers>> {
        load_common(&pool.conn)
    }
}
