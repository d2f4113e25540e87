pub mod config;
pub mod init;
pub mod render;
pub mod show;
pub mod weekday;

use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::loader::load_records;
use crate::models::week_chart::WeekChart;
use crate::ui::messages::{info, warning};
use crate::utils::date::WeekWindow;
use crate::utils::path::expand_tilde;

/// Shared by `show` and `render`: load the records and lay out the week.
pub(crate) fn build_chart(input: &str, week: &Option<String>, cfg: &Config) -> AppResult<WeekChart> {
    let path = expand_tilde(input);
    let records = load_records(&path)?;

    let window = match week {
        Some(d) => WeekWindow::parse(d)?,
        None => WeekWindow::current(),
    };

    info(format!(
        "{} record(s) loaded from {}, week {} / {}",
        records.len(),
        path.display(),
        window.start,
        window.end
    ));

    let chart = Core::build_week_chart(&records, &window, &cfg.chart, &cfg.title)?;

    if chart.discarded > 0 {
        warning(format!(
            "{} record(s) skipped: start is not before end",
            chart.discarded
        ));
    }

    Ok(chart)
}
