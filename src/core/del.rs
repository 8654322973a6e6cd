use crate::cache::{self, CacheStore};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_result;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the result for a day and invalidate its cache entry, so an
    /// immediate re-query renders the empty state instead of a stale hit.
    pub fn apply(
        pool: &mut DbPool,
        store: &mut CacheStore,
        namespace: &str,
        date: NaiveDate,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let removed = delete_result(&pool.conn, date)?;
        if removed == 0 {
            return Err(AppError::NoResultForDate(date_str));
        }

        store.invalidate(&cache::cache_key(namespace, date));

        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            &date_str,
            &format!("Result deleted for {}", date_str),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        info(format!("Deleted result for {}", date));
        Ok(())
    }
}
