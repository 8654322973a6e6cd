use crate::cache::CacheStore;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Add or update the daily result for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        first,
        second,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        //
        // 2. Open DB and cache
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = CacheStore::open(&cfg.cache_file);

        //
        // 3. Execute logic (validation happens inside)
        //
        AddLogic::apply(
            &mut pool,
            &mut store,
            &cfg.cache_namespace,
            d,
            first,
            second,
        )?;
    }

    Ok(())
}
