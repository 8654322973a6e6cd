pub mod common;
pub mod dreams;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Convenience helper used by tests and tooling: insert (or update) a
/// daily result from plain strings.
pub fn add_result(conn: &Connection, date: &str, first: &str, second: &str) -> AppResult<()> {
    use crate::errors::AppError;
    use crate::models::daily_result::DailyResult;
    use crate::models::raw;

    let d = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let first = raw::require_valid(&raw::normalize(Some(first)))
        .map_err(AppError::InvalidNumber)?;
    let second = raw::require_valid(&raw::normalize(Some(second)))
        .map_err(AppError::InvalidNumber)?;

    let result = DailyResult {
        date: d,
        first_round: first,
        second_round: second,
    };
    queries::upsert_result(conn, &result)?;
    Ok(())
}
