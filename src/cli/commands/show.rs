use crate::cli::commands::build_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::preview::render_preview;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        input,
        week,
        no_color,
    } = cmd
    {
        let chart = build_chart(input, week, cfg)?;
        print!("{}", render_preview(&chart, cfg, !*no_color)?);
    }
    Ok(())
}
