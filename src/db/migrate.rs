use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::daily_result::local_midnight_ms;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Declared type of a column, or None if the column is missing.
fn column_type(conn: &Connection, table: &str, column: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(1)?, row.get::<_, String>(2)?))
    })?;

    for c in cols {
        let (name, ty) = c?;
        if name == column {
            return Ok(Some(ty));
        }
    }
    Ok(None)
}

/// Create the `results` table with the modern schema.
///
/// `date` is the unique day key (one document per date is enforced here,
/// at the write path, not at read time). `date_ts` holds local-midnight
/// epoch millis and backs the half-open range query of the fetcher.
/// Rounds are raw TEXT: new writes store JSON array text, old rows may
/// still carry scalar or comma-joined shapes.
fn create_results_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS results (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL UNIQUE,
            date_ts      INTEGER NOT NULL,
            first_round  TEXT,
            second_round TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_results_date_ts ON results(date_ts);
        "#,
    )?;
    Ok(())
}

fn create_dreams_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS dreams (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            dream      TEXT NOT NULL,
            direct     TEXT NOT NULL DEFAULT '',
            house      TEXT NOT NULL DEFAULT '',
            ending     TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_common_numbers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS common_numbers (
            date       TEXT PRIMARY KEY,
            row1       TEXT NOT NULL,
            row2       TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Migrate a legacy `results` table where the rounds were INTEGER scalar
/// columns to the modern raw TEXT columns. The scalar values survive as
/// text and are picked up by the scalar branch of the normalizer.
fn migrate_rounds_to_text(conn: &Connection) -> AppResult<bool> {
    if !table_exists(conn, "results")? {
        return Ok(false); // no table yet, nothing to migrate
    }

    let first_ty = column_type(conn, "results", "first_round")?.unwrap_or_default();
    if !first_ty.eq_ignore_ascii_case("INTEGER") {
        return Ok(false); // already TEXT
    }

    warning("Migrating results table: scalar round columns -> raw text...");

    // Legacy tables may predate date_ts / created_at entirely.
    let ts_expr = if column_type(conn, "results", "date_ts")?.is_some() {
        "COALESCE(date_ts, 0)"
    } else {
        "0"
    };
    let created_expr = if column_type(conn, "results", "created_at")?.is_some() {
        "COALESCE(created_at, '')"
    } else {
        "''"
    };

    conn.execute_batch(&format!(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE results RENAME TO results_old;

        CREATE TABLE results (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL UNIQUE,
            date_ts      INTEGER NOT NULL,
            first_round  TEXT,
            second_round TEXT,
            created_at   TEXT NOT NULL
        );

        INSERT INTO results (id, date, date_ts, first_round, second_round, created_at)
        SELECT id, date,
               {ts_expr},
               CAST(first_round AS TEXT),
               CAST(second_round AS TEXT),
               {created_expr}
        FROM results_old;

        DROP TABLE results_old;

        CREATE INDEX IF NOT EXISTS idx_results_date_ts ON results(date_ts);

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#
    ))?;

    Ok(true)
}

/// Backfill `date_ts` for rows migrated with a zero placeholder.
fn backfill_date_ts(conn: &Connection) -> AppResult<usize> {
    let rows: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, date FROM results WHERE date_ts = 0")?;
        let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut v = Vec::new();
        for r in mapped {
            v.push(r?);
        }
        v
    };

    let mut updated = 0;
    for (id, date_str) in rows {
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
        conn.execute(
            "UPDATE results SET date_ts = ?1 WHERE id = ?2",
            params![local_midnight_ms(date), id],
        )?;
        updated += 1;
    }

    Ok(updated)
}

/// Run every pending migration in order. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let rounds_migrated = migrate_rounds_to_text(conn)?;

    create_results_table(conn)?;
    create_dreams_table(conn)?;
    create_common_numbers_table(conn)?;

    let backfilled = backfill_date_ts(conn)?;

    if rounds_migrated {
        ttlog(
            conn,
            "migration_applied",
            "results",
            "Converted scalar round columns to raw text",
        )?;
    }
    if backfilled > 0 {
        ttlog(
            conn,
            "migration_applied",
            "results",
            &format!("Backfilled date_ts for {} rows", backfilled),
        )?;
    }

    Ok(())
}

/// Run an integrity check and report the result string.
pub fn integrity_check(conn: &Connection) -> AppResult<String> {
    let out: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(out)
}
