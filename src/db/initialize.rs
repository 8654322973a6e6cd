use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database: set session pragmas, then let the migration
/// engine guarantee the schema. No direct CREATE TABLE here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        PRAGMA foreign_keys = ON;
        "#,
    )?;

    run_pending_migrations(conn)?;
    Ok(())
}
