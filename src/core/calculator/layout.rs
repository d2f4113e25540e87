//! Maps time ranges to pixel rectangles on the weekly chart grid and
//! decides, per day, which bars are drawn.
//!
//! Horizontal axis: `ticks` ticks covering 24 hours, starting right after the
//! weekday labels. Vertical axis: one row per weekday below the hour labels.

use crate::config::ChartConfig;
use crate::core::calculator::idle::idle_gaps;
use crate::core::calculator::merge::{merge_by_category, union_of};
use crate::errors::{AppError, AppResult};
use crate::models::pixel_rect::{BarKind, DayLayout, DayState, IdleMarker, PixelRect};
use crate::models::shift_record::ShiftRecord;
use crate::models::time_range::{TimeRange, day_start, day_window};
use crate::models::week_chart::{ChartFrame, HourTick, RowLabel};
use crate::utils::date::{WeekWindow, short_label, weekday_of};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub struct LayoutMapper<'a> {
    cfg: &'a ChartConfig,
}

impl<'a> LayoutMapper<'a> {
    /// Fails when the chart constants cannot be laid out (see
    /// [`ChartConfig::validate`]).
    pub fn new(cfg: &'a ChartConfig) -> AppResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Rectangle of `range` in row `weekday`.
    ///
    /// `BarKind::Full` ignores the range bounds and spans the whole day the
    /// range starts on. Other kinds require a range inside a single day.
    pub fn layout(&self, weekday: u8, range: &TimeRange, kind: BarKind) -> AppResult<PixelRect> {
        if weekday > 6 {
            return Err(AppError::InvalidWeekday(weekday));
        }

        let day = range.day();
        let span = if kind == BarKind::Full {
            day_window(day)
        } else {
            if !range.is_valid() {
                return Err(AppError::InvalidRange(range.to_string()));
            }
            if range.crosses_day_boundary() {
                return Err(AppError::CrossesDayBoundary(range.to_string()));
            }
            *range
        };

        let start_h = hour_in_day(day, span.start);
        let end_h = hour_in_day(day, span.end);

        let x = self.x_for_hour(start_h);
        let width = self.x_for_hour(end_h) - x;

        let row_top = self.row_top(weekday);
        let (y, height) = if kind.is_flush() {
            (
                row_top + self.cfg.idle_inset,
                self.cfg.row_height() - 2.0 * self.cfg.idle_inset,
            )
        } else {
            (row_top + self.cfg.padding, self.cfg.bar_height)
        };

        // short idle slots stay unmarked
        let marker = (kind == BarKind::Idle && end_h - start_h >= self.cfg.hours_per_tick()).then(
            || IdleMarker {
                cx: x + width / 2.0,
                cy: y + height / 2.0,
                radius: self.cfg.idle_marker_radius,
            },
        );

        Ok(PixelRect {
            x,
            y,
            width,
            height,
            kind,
            category: None,
            range: span,
            marker,
        })
    }

    /// Bars of one day.
    ///
    /// Idle time is computed against the union of every category, while
    /// on-duty bars are drawn per category. Shift parts after midnight are
    /// clipped away, and an end within the configured tolerance of midnight
    /// counts as midnight.
    pub fn compute_day_layout(&self, day: NaiveDate, records: &[ShiftRecord]) -> AppResult<DayLayout> {
        let weekday = weekday_of(day);
        let window = day_window(day);

        let prepared: Vec<ShiftRecord> = records
            .iter()
            .filter(|r| r.range.is_valid())
            .filter_map(|r| {
                self.snap_day_end(&r.range, window.end)
                    .clip_to(&window)
                    .map(|range| r.with_range(range))
            })
            .collect();

        if prepared.is_empty() {
            return Ok(DayLayout {
                date: day,
                weekday,
                state: DayState::NoShifts,
                rects: vec![self.layout(weekday, &window, BarKind::Idle)?],
            });
        }

        let schedule = merge_by_category(&prepared)?;
        let occupied = union_of(&schedule)?;
        let gaps = idle_gaps(&occupied, window.start, window.end);

        if gaps.is_empty() {
            return Ok(DayLayout {
                date: day,
                weekday,
                state: DayState::FullCoverage,
                rects: vec![self.layout(weekday, &window, BarKind::Full)?],
            });
        }

        let mut rects = Vec::new();
        for (code, ranges) in &schedule {
            for range in ranges {
                let mut rect = self.layout(weekday, range, BarKind::OnDuty)?;
                rect.category = Some(code.clone());
                rects.push(rect);
            }
        }
        for gap in &gaps {
            rects.push(self.layout(weekday, gap, BarKind::Idle)?);
        }

        Ok(DayLayout {
            date: day,
            weekday,
            state: DayState::PartialCoverage,
            rects,
        })
    }

    /// Axes, labels and grid lines of the chart for `week`.
    pub fn frame(&self, week: &WeekWindow) -> ChartFrame {
        let cfg = self.cfg;
        let row_h = cfg.row_height();

        let hour_ticks = (0..=cfg.ticks)
            .map(|i| {
                let hour = i * 24 / cfg.ticks;
                HourTick {
                    hour,
                    x: cfg.week_axis_width + i as f32 * cfg.tick_width,
                    label: hour.to_string(),
                }
            })
            .collect();

        let rows = week
            .dates()
            .into_iter()
            .enumerate()
            .map(|(i, date)| RowLabel {
                weekday: i as u8,
                y: self.row_top(i as u8),
                name: cfg.week_labels.get(i).cloned().unwrap_or_default(),
                date: short_label(date),
            })
            .collect();

        let grid_lines = (0..=7).map(|i| cfg.hour_axis_height + i as f32 * row_h).collect();

        ChartFrame {
            width: cfg.plot_width() + cfg.week_axis_width + cfg.right_margin,
            height: 7.0 * row_h + cfg.hour_axis_height,
            plot_left: cfg.week_axis_width,
            plot_top: cfg.hour_axis_height,
            hour_ticks,
            rows,
            grid_lines,
        }
    }

    fn x_for_hour(&self, hour: f32) -> f32 {
        self.cfg.week_axis_width + hour / self.cfg.hours_per_tick() * self.cfg.tick_width
    }

    fn row_top(&self, weekday: u8) -> f32 {
        self.cfg.hour_axis_height + weekday as f32 * self.cfg.row_height()
    }

    fn snap_day_end(&self, range: &TimeRange, day_end: NaiveDateTime) -> TimeRange {
        let tolerance = Duration::minutes(self.cfg.day_end_tolerance_minutes);
        if range.end < day_end && range.end >= day_end - tolerance && range.start < day_end {
            TimeRange::new_unchecked(range.start, day_end)
        } else {
            *range
        }
    }
}

/// Position of `t` inside `day`, in hours (0.0 at midnight, 24.0 at the
/// following midnight), with minute resolution.
fn hour_in_day(day: NaiveDate, t: NaiveDateTime) -> f32 {
    (t - day_start(day)).num_minutes() as f32 / 60.0
}
