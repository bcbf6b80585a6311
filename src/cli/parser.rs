use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gatelog
/// Register entries and exits of people at a facility
#[derive(Parser)]
#[command(
    name = "gatelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple gate log CLI: register entries and exits of visitors, residents and employees",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom location)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// Register an entry
    Add {
        /// Full name of the person (must be unique)
        #[arg(long = "name")]
        name: String,

        /// Identity document number
        #[arg(long = "doc")]
        doc: String,

        /// Car model
        #[arg(long = "car")]
        car: String,

        /// License plate
        #[arg(long = "plate")]
        plate: String,

        /// Street address
        #[arg(long = "address")]
        address: String,

        /// House / unit number
        #[arg(long = "number")]
        number: String,

        /// Visitor, Resident or Employee
        #[arg(long = "kind")]
        kind: String,
    },

    /// Register the exit for one or more records
    Out {
        /// Record ids as shown by `list`
        #[arg(required = true, num_args = 1..)]
        ids: Vec<usize>,
    },

    /// Delete one or more records (ids are renumbered afterwards)
    Del {
        /// Record ids as shown by `list`
        #[arg(required = true, num_args = 1..)]
        ids: Vec<usize>,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List all records, most recent arrival first
    List,

    /// Search records by name (case-insensitive, partial match)
    Search {
        /// Part of the name to look for
        term: String,
    },

    /// Export all records to a spreadsheet
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
