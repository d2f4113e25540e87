use crate::config::ChartConfig;
use crate::core::calculator::grouper::{DayBuckets, group_for_week};
use crate::core::calculator::layout::LayoutMapper;
use crate::errors::AppResult;
use crate::models::shift_record::ShiftRecord;
use crate::models::week_chart::WeekChart;
use crate::utils::date::WeekWindow;
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    /// Full render pass: group, merge, find idle gaps and lay out the seven
    /// rows of `week`.
    ///
    /// Shifts running past midnight are cut into same-day pieces and every
    /// piece is drawn on its own day, so a Sunday night shift also shows up
    /// on the Monday of the following week.
    pub fn build_week_chart(
        records: &[ShiftRecord],
        week: &WeekWindow,
        cfg: &ChartConfig,
        title: &str,
    ) -> AppResult<WeekChart> {
        let mapper = LayoutMapper::new(cfg)?;

        let grouped = group_for_week(records, week);
        let per_day = split_across_days(&grouped.buckets);

        let mut days = Vec::with_capacity(7);
        for day in week.dates() {
            let day_records = per_day
                .get(&day)
                .map(Vec::as_slice)
                .unwrap_or_default();
            days.push(mapper.compute_day_layout(day, day_records)?);
        }

        Ok(WeekChart {
            title: title.to_string(),
            week_start: week.start,
            week_end: week.end,
            frame: mapper.frame(week),
            days,
            discarded: grouped.discarded,
        })
    }
}

/// Re-buckets records by the day each of their same-day pieces falls on.
/// Records are copied with the piece as range; the buckets stay untouched.
fn split_across_days(buckets: &DayBuckets) -> DayBuckets {
    let mut per_day: DayBuckets = BTreeMap::new();
    for rec in buckets.values().flatten() {
        for piece in rec.range.split_by_day() {
            per_day
                .entry(piece.day())
                .or_default()
                .push(rec.with_range(piece));
        }
    }
    per_day
}
