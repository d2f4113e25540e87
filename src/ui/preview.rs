//! Terminal rendering of a week chart: one text row per weekday, one
//! character cell per `preview_cell_minutes`.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::pixel_rect::{BarKind, DayLayout, DayState};
use crate::models::time_range::day_start;
use crate::models::week_chart::WeekChart;
use crate::utils::colors::parse_hex;
use crate::utils::formatting::{mins2readable, pad_right};
use chrono::Duration;
use unicode_width::UnicodeWidthStr;

const CELL_ON_DUTY: char = '█';
const CELL_IDLE: char = '░';
const CELL_FULL: char = '▓';

/// Bar kind drawn in each cell of `day`, by cell midpoint.
pub fn day_cells(day: &DayLayout, cell_minutes: u32) -> Vec<BarKind> {
    let cells = (24 * 60 / cell_minutes.max(1)) as usize;
    let base = day_start(day.date);

    (0..cells)
        .map(|i| {
            let mid = base
                + Duration::minutes(i as i64 * cell_minutes as i64)
                + Duration::seconds(cell_minutes as i64 * 30);

            let hit = |kind: BarKind| {
                day.rects_of(kind)
                    .any(|r| r.range.start <= mid && mid < r.range.end)
            };

            if hit(BarKind::Full) {
                BarKind::Full
            } else if hit(BarKind::OnDuty) {
                BarKind::OnDuty
            } else {
                BarKind::Idle
            }
        })
        .collect()
}

/// Renders the chart as text. `color` switches ANSI colouring on.
pub fn render_preview(chart: &WeekChart, cfg: &Config, color: bool) -> AppResult<String> {
    let cell_minutes = cfg.preview_cell_minutes;
    if cell_minutes == 0 || (24 * 60) % cell_minutes != 0 {
        return Err(AppError::Config(format!(
            "preview_cell_minutes must divide a day evenly, got {cell_minutes}"
        )));
    }

    let palette = &cfg.chart.colors;
    let on_duty = parse_hex(&palette.on_duty)?.to_ansi();
    let idle = parse_hex(&palette.idle)?.to_ansi();
    let full = parse_hex(&palette.full)?.to_ansi();

    let label_w = chart
        .frame
        .rows
        .iter()
        .map(|r| UnicodeWidthStr::width(format!("{} {}", r.name, r.date).as_str()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} / {})\n",
        chart.title, chart.week_start, chart.week_end
    ));

    // hour axis: one label per tick
    let ticks = cfg.chart.ticks.max(1);
    let cells_per_tick = (24 * 60 / cell_minutes / ticks) as usize;
    let mut axis = " ".repeat(label_w);
    for tick in chart.frame.hour_ticks.iter().take(ticks as usize) {
        axis.push_str(&pad_right(&tick.label, cells_per_tick.max(tick.label.len())));
    }
    axis.push_str("24/h");
    out.push_str(axis.trim_end());
    out.push('\n');

    for (day, row) in chart.days.iter().zip(&chart.frame.rows) {
        let label = format!("{} {}", row.name, row.date);
        // pad by display width, labels may be CJK
        let pad = label_w.saturating_sub(UnicodeWidthStr::width(label.as_str()));
        out.push_str(&label);
        out.push_str(&" ".repeat(pad));

        for kind in day_cells(day, cell_minutes) {
            let (glyph, colour) = match kind {
                BarKind::OnDuty => (CELL_ON_DUTY, on_duty),
                BarKind::Idle => (CELL_IDLE, idle),
                BarKind::Full => (CELL_FULL, full),
            };
            if color {
                out.push_str(&colour.paint(glyph.to_string()).to_string());
            } else {
                out.push(glyph);
            }
        }

        out.push_str("  ");
        out.push_str(&day_summary(day));
        out.push('\n');
    }

    if chart.discarded > 0 {
        out.push_str(&format!(
            "{} record(s) with an invalid range were skipped\n",
            chart.discarded
        ));
    }

    Ok(out)
}

fn day_summary(day: &DayLayout) -> String {
    match day.state {
        DayState::NoShifts => "no shifts".to_string(),
        DayState::FullCoverage => "fully covered".to_string(),
        DayState::PartialCoverage => {
            let idle: i64 = day
                .rects_of(BarKind::Idle)
                .map(|r| r.range.duration_minutes())
                .sum();
            format!("idle {}", mins2readable(idle, false, false))
        }
    }
}
