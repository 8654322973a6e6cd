use crate::db::dreams::{delete_dream, find_dream, insert_dream, load_dreams, update_dream};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::dream::DreamEntry;
use crate::ui::messages::success;

/// CRUD logic for dream-number entries.
pub struct DreamLogic;

impl DreamLogic {
    pub fn add(
        pool: &mut DbPool,
        dream: &str,
        direct: &str,
        house: &str,
        ending: &str,
    ) -> AppResult<i64> {
        if dream.trim().is_empty() {
            return Err(AppError::Validation(
                "Dream description must not be empty".into(),
            ));
        }

        let entry = DreamEntry::new(
            dream.trim().to_string(),
            direct.trim().to_string(),
            house.trim().to_string(),
            ending.trim().to_string(),
        );
        let id = insert_dream(&pool.conn, &entry)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "dream_add",
            &id.to_string(),
            &format!("Dream entry #{} added", id),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Dream entry #{} added.", id));
        Ok(id)
    }

    /// Patch only the provided fields of an existing entry.
    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        dream: Option<&str>,
        direct: Option<&str>,
        house: Option<&str>,
        ending: Option<&str>,
    ) -> AppResult<()> {
        let mut entry = find_dream(&pool.conn, id)?.ok_or(AppError::NoDreamEntry(id))?;

        if let Some(d) = dream {
            if d.trim().is_empty() {
                return Err(AppError::Validation(
                    "Dream description must not be empty".into(),
                ));
            }
            entry.dream = d.trim().to_string();
        }
        if let Some(v) = direct {
            entry.direct = v.trim().to_string();
        }
        if let Some(v) = house {
            entry.house = v.trim().to_string();
        }
        if let Some(v) = ending {
            entry.ending = v.trim().to_string();
        }

        update_dream(&pool.conn, &entry)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "dream_edit",
            &id.to_string(),
            &format!("Dream entry #{} updated", id),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Dream entry #{} updated.", id));
        Ok(())
    }

    pub fn del(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_dream(&pool.conn, id)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "dream_del",
            &id.to_string(),
            &format!("Dream entry #{} deleted", id),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Dream entry #{} deleted.", id));
        Ok(())
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<DreamEntry>> {
        load_dreams(&pool.conn)
    }
}
