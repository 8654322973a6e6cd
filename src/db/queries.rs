use crate::errors::{AppError, AppResult};
use crate::models::daily_result::{DailyResult, ResultRow, day_range_ms, local_midnight_ms};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<ResultRow> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(ResultRow {
        id: row.get("id")?,
        date,
        first_round_raw: row.get("first_round")?,
        second_round_raw: row.get("second_round")?,
        created_at: row.get("created_at")?,
    })
}

/// Fetch at most one result for the given calendar day.
///
/// Builds the half-open range [local midnight, next local midnight) over
/// `date_ts` and takes the first match. Not-found is `Ok(None)`, never an
/// error; store failures map to `AppError::Retrieval` so callers can keep
/// the two apart.
pub fn find_result_in_range(conn: &Connection, date: NaiveDate) -> AppResult<Option<ResultRow>> {
    let (start, end) = day_range_ms(date);

    let mut stmt = conn
        .prepare(
            "SELECT * FROM results
             WHERE date_ts >= ?1 AND date_ts < ?2
             ORDER BY date_ts ASC
             LIMIT 1",
        )
        .map_err(|e| AppError::Retrieval(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![start, end], map_row)
        .map_err(|e| AppError::Retrieval(e.to_string()))?;

    match rows.next() {
        None => Ok(None),
        Some(Ok(row)) => Ok(Some(row)),
        Some(Err(e)) => Err(AppError::Retrieval(e.to_string())),
    }
}

/// Exact get-by-key lookup on the unique day column.
pub fn find_result_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<ResultRow>> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let mut stmt = conn.prepare("SELECT * FROM results WHERE date = ?1")?;
    let mut rows = stmt.query_map([date_str], map_row)?;

    match rows.next() {
        None => Ok(None),
        Some(r) => Ok(Some(r?)),
    }
}

/// Insert or update the single result for a date. Uniqueness lives in the
/// schema (`date` UNIQUE): duplicates can never be created, so the
/// first-match read never has to break a tie.
///
/// Returns true when a new row was created, false on update.
pub fn upsert_result(conn: &Connection, result: &DailyResult) -> AppResult<bool> {
    let existed = find_result_by_date(conn, result.date)?.is_some();

    conn.execute(
        "INSERT INTO results (date, date_ts, first_round, second_round, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(date) DO UPDATE SET
             date_ts = excluded.date_ts,
             first_round = excluded.first_round,
             second_round = excluded.second_round",
        params![
            result.date_str(),
            local_midnight_ms(result.date),
            DailyResult::round_to_raw(&result.first_round),
            DailyResult::round_to_raw(&result.second_round),
            chrono::Local::now().to_rfc3339(),
        ],
    )
    .map_err(|e| AppError::Write(e.to_string()))?;

    Ok(!existed)
}

/// Delete the result for a date. Returns the number of removed rows.
pub fn delete_result(conn: &Connection, date: NaiveDate) -> AppResult<usize> {
    let n = conn
        .execute(
            "DELETE FROM results WHERE date = ?1",
            [date.format("%Y-%m-%d").to_string()],
        )
        .map_err(|e| AppError::Write(e.to_string()))?;
    Ok(n)
}

/// All results between two days inclusive, oldest first.
pub fn load_results_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ResultRow>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM results
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_results(conn: &Connection) -> AppResult<Vec<ResultRow>> {
    let mut stmt = conn.prepare("SELECT * FROM results ORDER BY date ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent published date, if any. The admin form preselects it.
pub fn latest_result_date(conn: &Connection) -> AppResult<Option<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT date FROM results ORDER BY date DESC LIMIT 1")?;
    let mut rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    match rows.next() {
        None => Ok(None),
        Some(r) => {
            let s = r?;
            let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s))?;
            Ok(Some(d))
        }
    }
}
