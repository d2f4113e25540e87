//! shiftchart library root.
//! The scheduling core (merge, idle gaps, grouping, layout) lives in `core`;
//! `loader`, `export`, `ui` and `cli` are the thin layers around it used by
//! the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod loader;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Weekday { .. } => cli::commands::weekday::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the current file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => {
            let custom = cli.config.as_deref().map(expand_tilde);
            Config::load(custom.as_deref())?
        }
    };

    dispatch(&cli, &cfg)
}
