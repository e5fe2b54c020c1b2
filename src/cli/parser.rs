use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for targetlock
/// CLI application to track piece-rate daily earnings against a monthly goal
#[derive(Parser)]
#[command(
    name = "targetlock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A piece-rate earnings tracker: record daily work items and chase a monthly revenue target",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or a custom data file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store for the current month
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record work items on a day
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Catalog item id (see `targetlock items`)
        item: String,

        /// Number of units to add (default 1)
        qty: Option<i64>,

        /// Subtract units instead of adding (count clamps at zero)
        #[arg(long = "minus")]
        minus: bool,
    },

    /// Set a day's work flag or kasbon advance
    Day {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Mark the day as a working day
        #[arg(long = "work", conflicts_with = "off")]
        work: bool,

        /// Mark the day as a rest day (items and meal forfeited)
        #[arg(long = "off")]
        off: bool,

        /// Cash advance taken on this day (cut from take-home, not the target)
        #[arg(long = "kasbon", value_name = "AMOUNT")]
        kasbon: Option<i64>,
    },

    /// Show or update the monthly goal, meal allowance and active month
    Target {
        /// Set the monthly revenue target
        #[arg(long = "set", value_name = "AMOUNT")]
        set: Option<i64>,

        /// Set the daily meal allowance
        #[arg(long = "meal", value_name = "AMOUNT")]
        meal: Option<i64>,

        /// Switch the active month (records are kept across switches)
        #[arg(long = "month", value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Daily dashboard: strict target, income, surplus, take-home, warnings
    Status {
        /// Date to inspect (default: today)
        date: Option<String>,
    },

    /// Month heat view: one cell per day with net income and status
    Calendar {
        /// Month to show (YYYY-MM, default: the active month)
        month: Option<String>,
    },

    /// Month evaluation: projection, percentages, ledger totals and verdict
    Report {
        /// Month to evaluate (YYYY-MM, default: the active month)
        month: Option<String>,

        /// Reference date for the projection split (default: today)
        #[arg(long = "date", value_name = "DATE")]
        reference: Option<String>,
    },

    /// Print the service catalog grouped by category
    Items,

    /// Export per-day report rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "YYYY-MM",
            help = "Export every day of one month instead of all stored records"
        )]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a backup copy of the store document
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace the store with a backup document
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}
