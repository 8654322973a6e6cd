use crate::errors::{AppError, AppResult};
use crate::models::common::CommonNumbers;
use crate::models::raw;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<CommonNumbers> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let row1_raw: String = row.get("row1")?;
    let row2_raw: String = row.get("row2")?;

    Ok(CommonNumbers {
        date,
        row1: raw::valid_numbers(&raw::normalize(Some(&row1_raw))),
        row2: raw::valid_numbers(&raw::normalize(Some(&row2_raw))),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Set-by-key: insert or replace the guesses for a day, keeping the
/// original created_at on update.
pub fn set_common(conn: &Connection, numbers: &CommonNumbers) -> AppResult<()> {
    conn.execute(
        "INSERT INTO common_numbers (date, row1, row2, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(date) DO UPDATE SET
             row1 = excluded.row1,
             row2 = excluded.row2,
             updated_at = excluded.updated_at",
        params![
            numbers.date_str(),
            serde_json::to_string(&numbers.row1).unwrap_or_else(|_| "[]".into()),
            serde_json::to_string(&numbers.row2).unwrap_or_else(|_| "[]".into()),
            numbers.created_at,
            numbers.updated_at,
        ],
    )
    .map_err(|e| AppError::Write(e.to_string()))?;
    Ok(())
}

/// Get-by-key lookup.
pub fn get_common(conn: &Connection, date: NaiveDate) -> AppResult<Option<CommonNumbers>> {
    let mut stmt = conn.prepare("SELECT * FROM common_numbers WHERE date = ?1")?;
    let mut rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_row)?;

    match rows.next() {
        None => Ok(None),
        Some(r) => Ok(Some(r?)),
    }
}

/// All guesses, newest day first.
pub fn load_common(conn: &Connection) -> AppResult<Vec<CommonNumbers>> {
    let mut stmt = conn.prepare("SELECT * FROM common_numbers ORDER BY date DESC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
