use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourtrack
/// CLI application to log team working hours by subject
#[derive(Parser)]
#[command(
    name = "hourtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log working hours per person and subject, and build team hour reports",
    long_about = None
)]
pub struct Cli {
    /// Override the data folder (useful for tests or shared folders)
    #[arg(global = true, long = "data", value_name = "DIR")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the data folder
    Init,

    /// Manage the configuration file (view or edit)
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

    /// Log hours worked by a team member
    Add {
        /// Full name of the team member
        name: String,

        /// Date worked (dd-mm-yyyy by default, YYYY-MM-DD also accepted)
        date: String,

        /// Hours worked (positive number, e.g. 2.5)
        hours: String,

        /// Work subject (see `hourtrack subjects`)
        subject: String,
    },

    /// List team members who have logged hours
    Names,

    /// List the configured work subjects
    Subjects,

    /// Show the manager dashboard: totals by person, by subject and per week
    Report,

    /// Export the current report
    Export {
        /// Export format: csv (hours per person) or json (full report)
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
