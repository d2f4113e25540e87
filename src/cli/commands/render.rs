use crate::cli::commands::build_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        format,
        file,
        week,
        force,
    } = cmd
    {
        let chart = build_chart(input, week, cfg)?;
        let out = expand_tilde(file);
        ExportLogic::export(
            &chart,
            &cfg.chart.colors,
            *format,
            &out.to_string_lossy(),
            *force,
        )?;
    }
    Ok(())
}
