use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let custom = cli.config.as_deref().map(expand_tilde);
        let path = Config::init(custom.as_deref(), *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
