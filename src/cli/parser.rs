use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for oarlog
/// CLI application to track rowing ergometer test results
#[derive(Parser)]
#[command(
    name = "oarlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track rowing test results: filter rowers, browse history and best times, record new tests",
    long_about = None
)]
pub struct Cli {
    /// Override the results file path (useful for tests or a shared file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config or saved-filter updates)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty results file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Import results from a JSON file in the store's wire format
    Import {
        /// Input file: a JSON array of test records
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Replace the whole collection instead of merging by id
        #[arg(long)]
        replace: bool,
    },

    /// List rowers (or raw results) matching the filters
    List {
        /// Filter by category (exact match, e.g. U23)
        #[arg(long)]
        category: Option<String>,

        /// Filter by test type (exact match, e.g. 2k or 6k)
        #[arg(long = "test-type")]
        test_type: Option<String>,

        /// Filter by season: a date prefix, YYYY or YYYY-MM
        #[arg(long)]
        season: Option<String>,

        /// Filter by rower name (case-insensitive substring)
        #[arg(long)]
        name: Option<String>,

        /// Re-apply the filters saved from the previous run
        #[arg(long, conflicts_with_all = ["category", "test_type", "season", "name"])]
        saved: bool,

        /// Clear the saved filters and list everything
        #[arg(long, conflicts_with = "saved")]
        reset: bool,

        /// List the raw filtered results instead of the rower table
        #[arg(long = "results")]
        results: bool,
    },

    /// Show one rower: club, category, best times, full test history
    Show {
        /// Rower name (exact)
        name: String,
    },

    /// Print the (date, seconds) trend series for a rower
    Trend {
        /// Rower name (exact)
        name: String,

        /// Restrict to one test type (default: both 2k and 6k)
        #[arg(long = "test-type")]
        test_type: Option<String>,

        /// Only tests from the current calendar year
        #[arg(long = "current-season")]
        current_season: bool,
    },

    /// Record a new test result
    Add {
        /// Rower name (existing or new)
        name: String,

        /// Test type (default: the configured default, normally 2k)
        #[arg(long = "test-type")]
        test_type: Option<String>,

        /// Test date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Test time, e.g. "6:45,3" or "1:02:03"
        #[arg(long)]
        time: String,

        /// Club label (default: the rower's first known club)
        #[arg(long)]
        club: Option<String>,

        /// Category label (default: the rower's first known category)
        #[arg(long)]
        category: Option<String>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Export filtered results
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long = "test-type")]
        test_type: Option<String>,

        #[arg(long)]
        season: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
