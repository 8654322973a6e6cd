use crate::cache::CacheStore;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!("Delete the result for {}? This action is irreversible.", d);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion (cache invalidation happens inside)
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = CacheStore::open(&cfg.cache_file);

        DeleteLogic::apply(&mut pool, &mut store, &cfg.cache_namespace, d)?;
        success(format!("Result for {} has been deleted.", d));
    }

    Ok(())
}
