use crate::cli::parser::{CommonAction, Commands};
use crate::config::Config;
use crate::core::common::CommonLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::table::{Column, Table, join_numbers};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Common { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            CommonAction::Set { date: d, row1, row2 } => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                CommonLogic::set(&mut pool, d, row1, row2)?;
            }

            CommonAction::Show { date: date_opt } => {
                let d = match date_opt {
                    Some(s) => {
                        date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?
                    }
                    None => date::today(),
                };

                match CommonLogic::get(&mut pool, d)? {
                    None => println!("No common numbers for {}.", d),
                    Some(c) => {
                        println!("Common numbers for {}\n", c.date_str());
                        println!("  Row 1: {}", join_numbers(&c.row1));
                        println!("  Row 2: {}", join_numbers(&c.row2));
                    }
                }
            }

            CommonAction::List => {
                let entries = CommonLogic::list(&mut pool)?;

                if entries.is_empty() {
                    println!("No common numbers available.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Date", 12),
                    Column::new("Row 1", 20),
                    Column::new("Row 2", 20),
                ]);

                for c in &entries {
                    table.add_row(vec![
                        c.date_str(),
                        join_numbers(&c.row1),
                        join_numbers(&c.row2),
                    ]);
                }

                print!("{}", table.render());
                println!("\n{} entr(ies).", entries.len());
            }
        }
    }

    Ok(())
}
