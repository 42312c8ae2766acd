use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLunchBank
/// Track lunch-break deficits against an hour bank stored in SQLite
#[derive(Parser)]
#[command(
    name = "rlunchbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small hour-bank tracker: record lunch breaks and keep the deficit balance in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Start the web interface
    Serve {
        #[arg(long = "bind", help = "Address to bind (default from config)")]
        bind: Option<String>,

        #[arg(long = "port", help = "Port to listen on (default from config)")]
        port: Option<u16>,
    },

    /// Record a lunch break
    Add {
        /// Date of the lunch break (YYYY-MM-DD)
        date: String,

        /// Departure time (HH:MM)
        departure: String,

        /// Return time (HH:MM)
        #[arg(value_name = "RETURN")]
        ret: String,
    },

    /// Show balance, lunch records and weeks
    List {
        #[arg(long = "weeks", help = "Show only the weeks")]
        weeks_only: bool,
    },

    /// Delete a lunch record by id
    Del {
        /// Lunch record id
        id: i64,
    },

    /// Delete ALL lunch records (weeks are kept)
    Reset {
        #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Close out or delete weeks
    Week {
        #[command(subcommand)]
        action: WeekAction,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export records and weeks
    Export {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Absolute path of the output file")]
        file: String,

        #[arg(long = "weeks", help = "CSV only: export weeks instead of lunch records")]
        weeks: bool,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WeekAction {
    /// Close the current period under NAME, snapshotting the total deficit
    Add { name: String },

    /// Delete a week by id
    Del { id: i64 },
}
