// src/export/model.rs

use crate::models::time_range::DATETIME_FMT;
use crate::models::week_chart::WeekChart;
use crate::utils::date::date_key;
use serde::Serialize;

/// One drawing instruction, flattened for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct RectExport {
    pub date: String,
    pub weekday: u8,
    pub state: String,
    pub kind: String,
    pub category: String,
    pub start: String,
    pub end: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Flatten every rect of the chart, day by day.
pub(crate) fn chart_to_rows(chart: &WeekChart) -> Vec<RectExport> {
    chart
        .days
        .iter()
        .flat_map(|day| {
            day.rects.iter().map(move |r| RectExport {
                date: date_key(day.date),
                weekday: day.weekday,
                state: day.state.as_str().to_string(),
                kind: r.kind.as_str().to_string(),
                category: r.category.clone().unwrap_or_default(),
                start: r.range.start.format(DATETIME_FMT).to_string(),
                end: r.range.end.format(DATETIME_FMT).to_string(),
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
            })
        })
        .collect()
}
