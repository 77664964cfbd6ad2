use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for cureport
/// CLI application to aggregate ClickUp time tracking into reports
#[derive(Parser)]
#[command(
    name = "cureport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate ClickUp time tracking into daily, weekly, monthly and all-time reports",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or multiple workspaces)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        #[arg(long = "api-key", help = "ClickUp personal API token")]
        api_key: Option<String>,

        #[arg(long = "team-id", help = "ClickUp workspace (team) id")]
        team_id: Option<String>,

        #[arg(
            long = "timezone",
            help = "IANA time zone used for day/month boundaries (default: Europe/Madrid)"
        )]
        timezone: Option<String>,
    },

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

    /// Time tracked at tasks in one day
    Day {
        /// Day to report (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Summarize a tracking period
    Summary {
        #[arg(
            long,
            short,
            default_value = "today",
            help = "Period: today, week, month, all, a YYYY-MM-DD day or a YYYY-MM month"
        )]
        period: String,

        #[arg(
            long = "shares",
            help = "Add a share column (time and percentage of the period total)"
        )]
        shares: bool,
    },

    /// Monthly report, resampled by day or grouped by task
    Month {
        /// Year of the report (e.g. 2024)
        year: i32,

        /// Month of the report (1-12)
        month: u32,

        #[arg(long = "by-task", help = "Group by top-level task instead of by day")]
        by_task: bool,
    },

    /// Export a report to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "DATE",
            conflicts_with = "month",
            help = "Export the day report for DATE (YYYY-MM-DD)"
        )]
        day: Option<String>,

        #[arg(long, value_name = "YYYY-MM", help = "Export a monthly report")]
        month: Option<String>,

        #[arg(long = "by-task", requires = "month")]
        by_task: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
