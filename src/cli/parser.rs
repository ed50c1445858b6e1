use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for studylogger
#[derive(Parser)]
#[command(
    name = "studylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small study logging CLI: record daily study start/stop times in SQLite",
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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Save the study session of a day (overwrites that day)
    Save {
        /// Date of the session (YYYY-MM-DD or "today")
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// Stop time (HH:MM), must be after the start time
        stop: String,

        #[arg(long, short, help = "Subject studied (default from configuration)")]
        category: Option<String>,
    },

    /// List recorded days
    List {
        #[arg(
            long,
            short,
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD or a range like YYYY-MM:YYYY-MM"
        )]
        period: Option<String>,

        #[arg(long = "today", conflicts_with = "period", help = "Show only today's entry")]
        now: bool,
    },

    /// Delete the entry of a day
    Del {
        /// Date to delete (YYYY-MM-DD)
        date: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the backup as a .zip archive")]
        compress: bool,
    },

    /// Export recorded days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance
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
}
