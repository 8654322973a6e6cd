use crate::cli::parser::{Commands, DreamAction};
use crate::config::Config;
use crate::core::dream::DreamLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dream { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            DreamAction::Add {
                dream,
                direct,
                house,
                ending,
            } => {
                DreamLogic::add(&mut pool, dream, direct, house, ending)?;
            }

            DreamAction::List => {
                let entries = DreamLogic::list(&mut pool)?;

                if entries.is_empty() {
                    println!("No dream entries available.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Id", 5),
                    Column::new("Dream", 36),
                    Column::new("Direct", 12),
                    Column::new("House", 8),
                    Column::new("Ending", 8),
                ]);

                for e in &entries {
                    table.add_row(vec![
                        e.id.to_string(),
                        e.dream.clone(),
                        e.direct.clone(),
                        e.house.clone(),
                        e.ending.clone(),
                    ]);
                }

                print!("{}", table.render());
                println!("\n{} entr(ies).", entries.len());
            }

            DreamAction::Edit {
                id,
                dream,
                direct,
                house,
                ending,
            } => {
                DreamLogic::edit(
                    &mut pool,
                    *id,
                    dream.as_deref(),
                    direct.as_deref(),
                    house.as_deref(),
                    ending.as_deref(),
                )?;
            }

            DreamAction::Del { id } => {
                DreamLogic::del(&mut pool, *id)?;
            }
        }
    }

    Ok(())
}
