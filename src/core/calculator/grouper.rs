//! Buckets shift records by the calendar day their range starts on.

use crate::errors::{AppError, AppResult};
use crate::models::shift_record::ShiftRecord;
use crate::utils::date::{WeekWindow, parse_date, weekday_of};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Day -> records starting on that day.
pub type DayBuckets = BTreeMap<NaiveDate, Vec<ShiftRecord>>;

#[derive(Debug, Default, Clone)]
pub struct GroupOutcome {
    pub buckets: DayBuckets,
    /// Records dropped because start >= end.
    pub discarded: usize,
}

/// Bucket every valid record by the date of its range start.
///
/// Records with an empty or reversed range are left out and counted in
/// `discarded`; they never make the grouping fail.
pub fn group(records: &[ShiftRecord]) -> GroupOutcome {
    let mut out = GroupOutcome::default();

    for rec in records {
        if !rec.range.is_valid() {
            out.discarded += 1;
            continue;
        }
        out.buckets
            .entry(rec.range.day())
            .or_default()
            .push(rec.clone());
    }

    out
}

/// Like [`group`], and also makes sure every day of `week` has a bucket
/// (possibly empty) so each row can be laid out.
pub fn group_for_week(records: &[ShiftRecord], week: &WeekWindow) -> GroupOutcome {
    let mut out = group(records);
    for day in week.dates() {
        out.buckets.entry(day).or_default();
    }
    out
}

/// Row index of a "YYYY-MM-DD" key: Monday = 0 ... Sunday = 6.
pub fn weekday_index(date_key: &str) -> AppResult<u8> {
    parse_date(date_key)
        .map(weekday_of)
        .ok_or_else(|| AppError::InvalidDate(date_key.to_string()))
}
