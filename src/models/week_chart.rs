use super::pixel_rect::DayLayout;
use chrono::NaiveDate;
use serde::Serialize;

/// Hour label on the horizontal axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HourTick {
    pub hour: u32,
    pub x: f32,
    pub label: String,
}

/// Weekday label on the vertical axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowLabel {
    pub weekday: u8,
    pub y: f32,
    pub name: String,
    pub date: String,
}

/// Static parts of the chart: canvas size, axes and grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartFrame {
    pub width: f32,
    pub height: f32,
    pub plot_left: f32,
    pub plot_top: f32,
    pub hour_ticks: Vec<HourTick>,
    pub rows: Vec<RowLabel>,
    /// y of every horizontal grid line (rows + 1 lines).
    pub grid_lines: Vec<f32>,
}

/// Everything a rendering surface needs for one week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekChart {
    pub title: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub frame: ChartFrame,
    /// Monday first.
    pub days: Vec<DayLayout>,
    /// Records dropped because their range had start >= end.
    pub discarded: usize,
}
