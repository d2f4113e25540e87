// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::chart_to_rows;
use crate::export::notify_export_success;
use crate::models::week_chart::WeekChart;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the whole chart (frame + days) as pretty-printed JSON.
pub(crate) fn export_json(chart: &WeekChart, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(chart)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV row per rect (header from serde).
pub(crate) fn export_csv(chart: &WeekChart, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in chart_to_rows(chart) {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
