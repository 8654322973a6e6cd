use crate::errors::{AppError, AppResult};
use crate::models::dream::DreamEntry;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<DreamEntry> {
    Ok(DreamEntry {
        id: row.get("id")?,
        dream: row.get("dream")?,
        direct: row.get("direct")?,
        house: row.get("house")?,
        ending: row.get("ending")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_dream(conn: &Connection, entry: &DreamEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO dreams (dream, direct, house, ending, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.dream,
            entry.direct,
            entry.house,
            entry.ending,
            entry.created_at
        ],
    )
    .map_err(|e| AppError::Write(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

pub fn update_dream(conn: &Connection, entry: &DreamEntry) -> AppResult<()> {
    let n = conn
        .execute(
            "UPDATE dreams
             SET dream = ?1, direct = ?2, house = ?3, ending = ?4
             WHERE id = ?5",
            params![
                entry.dream,
                entry.direct,
                entry.house,
                entry.ending,
                entry.id
            ],
        )
        .map_err(|e| AppError::Write(e.to_string()))?;

    if n == 0 {
        return Err(AppError::NoDreamEntry(entry.id));
    }
    Ok(())
}

pub fn delete_dream(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn
        .execute("DELETE FROM dreams WHERE id = ?1", [id])
        .map_err(|e| AppError::Write(e.to_string()))?;

    if n == 0 {
        return Err(AppError::NoDreamEntry(id));
    }
    Ok(())
}

pub fn find_dream(conn: &Connection, id: i64) -> AppResult<Option<DreamEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM dreams WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_row)?;

    match rows.next() {
        None => Ok(None),
        Some(r) => Ok(Some(r?)),
    }
}

/// All entries, newest first (public listing order).
pub fn load_dreams(conn: &Connection) -> AppResult<Vec<DreamEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM dreams ORDER BY created_at DESC, id DESC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
