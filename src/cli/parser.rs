use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftchart
#[derive(Parser)]
#[command(
    name = "shiftchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly shift coverage chart: on-duty bars, idle gaps and fully covered days",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// Print the week chart in the terminal
    Show {
        /// Shift records (.json or .csv)
        input: String,

        #[arg(
            long,
            value_name = "DATE",
            help = "Any day (YYYY-MM-DD) of the week to show; defaults to the current week"
        )]
        week: Option<String>,

        #[arg(long = "no-color", help = "Disable ANSI colours")]
        no_color: bool,
    },

    /// Compute the week chart and write its drawing instructions to a file
    Render {
        /// Shift records (.json or .csv)
        input: String,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "DATE", help = "Any day (YYYY-MM-DD) of the week to render")]
        week: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the chart row (Monday = 0 ... Sunday = 6) of a date
    Weekday {
        /// Date (YYYY-MM-DD)
        date: String,
    },
}
