// src/export/logic.rs

use crate::config::Palette;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf::ChartPdf;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::week_chart::WeekChart;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High-level export of a computed chart.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `chart` to `file` in `format`.
    ///
    /// An existing file is overwritten only with `force` or after the user
    /// confirms.
    pub fn export(
        chart: &WeekChart,
        palette: &Palette,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !ext.eq_ignore_ascii_case(format.as_str()) {
            warning(format!(
                "{} has no .{} extension, writing {} anyway",
                path.display(),
                format.as_str(),
                format.as_str().to_uppercase()
            ));
        }

        match format {
            ExportFormat::Json => export_json(chart, path)?,
            ExportFormat::Csv => export_csv(chart, path)?,
            ExportFormat::Pdf => export_pdf(chart, palette, path)?,
        }

        Ok(())
    }
}

fn export_pdf(chart: &WeekChart, palette: &Palette, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = ChartPdf::new(chart, palette)?;
    pdf.render(chart);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
