use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for teerlog
/// CLI back-office to publish Teer results with SQLite
#[derive(Parser)]
#[command(
    name = "teerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Publish Teer daily results, dream numbers and common numbers from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override local result-cache file path
    #[arg(global = true, long = "cache")]
    pub cache: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or update the daily result for a date
    Add {
        /// Date of the result (YYYY-MM-DD)
        date: String,

        /// First round numbers ("23" or "23,45")
        #[arg(long = "first", help = "First round numbers, comma separated")]
        first: String,

        /// Second round numbers ("12" or "12,30")
        #[arg(long = "second", help = "Second round numbers, comma separated")]
        second: String,
    },

    /// Delete the daily result for a date
    Del {
        /// Date (YYYY-MM-DD) to delete
        date: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show the result for today (or a given date), read-through cached
    Today {
        /// Date to show (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Bypass the local cache and refetch from the store
        #[arg(long = "refresh", help = "Ignore the cached value and refetch")]
        refresh: bool,
    },

    /// List published results
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY
        /// - YYYY-MM:YYYY-MM
        /// - YYYY-MM-DD:YYYY-MM-DD
        ///
        /// Special value:
        /// - all                   → the entire archive
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Bulk upload results from a file or stdin (date,first,second per line)
    Bulk {
        /// Input file; reads stdin when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Manage dream-number entries
    Dream {
        #[command(subcommand)]
        action: DreamAction,
    },

    /// Manage common-number guesses
    Common {
        #[command(subcommand)]
        action: CommonAction,
    },

    /// Export published results
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `list --period`)
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum DreamAction {
    /// Add a dream interpretation
    Add {
        /// Dream description
        #[arg(long)]
        dream: String,

        /// Direct numbers (comma separated)
        #[arg(long, default_value = "")]
        direct: String,

        /// House number(s)
        #[arg(long, default_value = "")]
        house: String,

        /// Ending number(s)
        #[arg(long, default_value = "")]
        ending: String,
    },

    /// List entries, newest first
    List,

    /// Edit fields of an existing entry
    Edit {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        dream: Option<String>,

        #[arg(long)]
        direct: Option<String>,

        #[arg(long)]
        house: Option<String>,

        #[arg(long)]
        ending: Option<String>,
    },

    /// Delete an entry by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CommonAction {
    /// Set the guesses for a date (insert or overwrite)
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        /// First row of guesses (comma separated)
        #[arg(long)]
        row1: String,

        /// Second row of guesses (comma separated)
        #[arg(long)]
        row2: String,
    },

    /// Show the guesses for a date (defaults to today)
    Show {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// List all guesses, newest first
    List,
}
