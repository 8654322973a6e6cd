use crate::cache::{self, CacheEntry, CacheStore};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_result;
use crate::errors::{AppError, AppResult};
use crate::models::daily_result::DailyResult;
use crate::models::raw;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

/// Parse one operator-entered round field ("23" or "23,45").
/// Rejects the whole field on any bad token: a publish must never store
/// a sentinel.
fn parse_round(field: &str, label: &str) -> AppResult<Vec<i64>> {
    let parsed = raw::normalize(Some(field));
    if parsed.is_empty() {
        return Err(AppError::Validation(format!(
            "{} round must not be empty",
            label
        )));
    }
    raw::require_valid(&parsed).map_err(|tok| {
        AppError::Validation(format!("{} round has a non-numeric value: '{}'", label, tok))
    })
}

impl AddLogic {
    /// Upsert the result for a day and refresh the cache entry so the
    /// display path immediately sees the new value.
    pub fn apply(
        pool: &mut DbPool,
        store: &mut CacheStore,
        namespace: &str,
        date: NaiveDate,
        first: &str,
        second: &str,
    ) -> AppResult<DailyResult> {
        //
        // 1. Validate both rounds
        //
        let first_round = parse_round(first, "First")?;
        let second_round = parse_round(second, "Second")?;

        let result = DailyResult {
            date,
            first_round,
            second_round,
        };

        //
        // 2. Upsert (one row per date; the schema enforces it)
        //
        let created = upsert_result(&pool.conn, &result)?;

        //
        // 3. Cache write-back
        //
        store.set(
            &cache::cache_key(namespace, date),
            CacheEntry {
                payload: result.clone(),
                written_at_ms: chrono::Local::now().timestamp_millis(),
            },
        );

        //
        // 4. Audit + user feedback (audit failure is non-blocking)
        //
        let verb = if created { "added" } else { "updated" };
        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &result.date_str(),
            &format!("Result {} for {}", verb, result.date_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Result {} for {}.", verb, result.date_str()));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use std::env;
    use std::fs;

    fn setup(name: &str) -> (DbPool, CacheStore) {
        let pool = DbPool::open_in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();

        let mut p = env::temp_dir();
        p.push(format!("{}_teerlog_add.json", name));
        let path = p.to_string_lossy().to_string();
        fs::remove_file(&path).ok();

        (pool, CacheStore::open(&path))
    }

    #[test]
    fn non_numeric_round_is_rejected() {
        let (mut pool, mut store) = setup("badround");
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let err = AddLogic::apply(&mut pool, &mut store, "teer", d, "23,x", "45").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.get("teer:2024-06-01").is_none());
    }

    #[test]
    fn apply_writes_row_and_cache() {
        let (mut pool, mut store) = setup("ok");
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let result = AddLogic::apply(&mut pool, &mut store, "teer", d, "23, 45", "12").unwrap();
        assert_eq!(result.first_round, vec![23, 45]);
        assert_eq!(result.second_round, vec![12]);

        let cached = store.get("teer:2024-06-01").unwrap();
        assert_eq!(cached.payload, result);
    }
}
