use crate::cache::CacheStore;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::today::{TodayLogic, ViewState};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::daily_result::DailyResult;
use crate::utils::date;
use crate::utils::table::{Column, Table, join_numbers};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today {
        date: date_opt,
        refresh,
    } = cmd
    {
        let d = match date_opt {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = CacheStore::open(&cfg.cache_file);

        let state = TodayLogic::run(
            &mut pool,
            &mut store,
            &cfg.cache_namespace,
            d,
            cfg.freshness_window_ms(),
            *refresh,
        )?;

        match state {
            ViewState::Ready(result) => print_result(&result),
            ViewState::ReadyEmpty => {
                println!("Teer result for {}", d);
                println!("No result found for this date yet.");
                println!("Results are typically updated after 3:30 PM and 4:30 PM.");
            }
        }
    }

    Ok(())
}

fn print_result(result: &DailyResult) {
    println!("Teer result for {}\n", result.date_str());

    let mut table = Table::new(vec![
        Column::new("First Round", 16),
        Column::new("Second Round", 16),
    ]);
    table.add_row(vec![
        join_numbers(&result.first_round),
        join_numbers(&result.second_round),
    ]);

    print!("{}", table.render());
}
