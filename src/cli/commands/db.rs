use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{integrity_check, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::queries::latest_result_date;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            info("Running migrations…");
            run_pending_migrations(&pool.conn)?;
            success("Migration completed.");
        }

        //
        // 2) INFO
        //
        if *show_info {
            print_db_info(&pool.conn, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            info("Running integrity check…");
            let integrity = integrity_check(&pool.conn)?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }
    }

    Ok(())
}

fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    let count = |table: &str| -> AppResult<i64> {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?)
    };

    println!("🗄️  Database: {}", db_path);

    let size = std::fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    println!("   Size:           {} bytes", size);
    println!("   Results:        {}", count("results")?);
    println!("   Dream entries:  {}", count("dreams")?);
    println!("   Common numbers: {}", count("common_numbers")?);
    println!("   Log rows:       {}", count("log")?);

    match latest_result_date(conn)? {
        Some(d) => println!("   Latest result:  {}", d),
        None => println!("   Latest result:  -"),
    }

    Ok(())
}
