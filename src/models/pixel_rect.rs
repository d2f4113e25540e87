use super::time_range::TimeRange;
use chrono::NaiveDate;
use serde::Serialize;

/// Semantic tag of a bar; also picks its colour.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    OnDuty,
    Idle,
    Full,
}

impl BarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarKind::OnDuty => "on_duty",
            BarKind::Idle => "idle",
            BarKind::Full => "full",
        }
    }

    /// On-duty bars sit inside the row padding, idle/full bars fill the row.
    pub fn is_flush(&self) -> bool {
        matches!(self, BarKind::Idle | BarKind::Full)
    }
}

/// Coverage classification of a single day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    NoShifts,
    PartialCoverage,
    FullCoverage,
}

impl DayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::NoShifts => "no_shifts",
            DayState::PartialCoverage => "partial",
            DayState::FullCoverage => "full",
        }
    }
}

/// Warning glyph drawn in the middle of long enough idle bars.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct IdleMarker {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

/// A rectangle in chart-local pixels (origin top-left, y grows downwards).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BarKind,
    /// Category code, only for on-duty bars.
    pub category: Option<String>,
    /// Time span the bar stands for.
    pub range: TimeRange,
    pub marker: Option<IdleMarker>,
}

impl PixelRect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Drawing instructions for one weekday row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub weekday: u8,
    pub state: DayState,
    pub rects: Vec<PixelRect>,
}

impl DayLayout {
    pub fn rects_of(&self, kind: BarKind) -> impl Iterator<Item = &PixelRect> {
        self.rects.iter().filter(move |r| r.kind == kind)
    }
}
