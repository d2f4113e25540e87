//! Interval merging: collapses overlapping or adjacent ranges into the
//! minimal ascending set covering the same time.

use crate::errors::{AppError, AppResult};
use crate::models::shift_record::ShiftRecord;
use crate::models::time_range::TimeRange;
use std::collections::BTreeMap;

/// Category code -> merged ranges of that category, for one day.
pub type MergedSchedule = BTreeMap<String, Vec<TimeRange>>;

/// Merge `ranges` into ascending, non-overlapping, non-adjacent ranges.
///
/// Works on a private copy: the caller's slice is never reordered or
/// modified. A range starting exactly where the current one ends is fused
/// with it, so back-to-back shifts come out as one continuous bar.
pub fn merge_ranges(ranges: &[TimeRange]) -> AppResult<Vec<TimeRange>> {
    if ranges.is_empty() {
        return Err(AppError::EmptyInput);
    }

    // stable: equal starts keep input order
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];

    for next in &sorted[1..] {
        if next.start > current.end {
            merged.push(current);
            current = *next;
        } else if next.end > current.end {
            current.end = next.end;
        }
    }
    merged.push(current);

    Ok(merged)
}

/// True when `ranges` is already in the shape `merge_ranges` produces.
pub fn is_merged(ranges: &[TimeRange]) -> bool {
    ranges.iter().all(TimeRange::is_valid) && ranges.windows(2).all(|w| w[0].end < w[1].start)
}

/// Group records by category code and merge every group.
/// Categories without records do not appear in the result.
pub fn merge_by_category(records: &[ShiftRecord]) -> AppResult<MergedSchedule> {
    let mut by_code: BTreeMap<String, Vec<TimeRange>> = BTreeMap::new();
    for rec in records {
        by_code
            .entry(rec.code().to_string())
            .or_default()
            .push(rec.range);
    }

    let mut schedule = MergedSchedule::new();
    for (code, ranges) in by_code {
        schedule.insert(code, merge_ranges(&ranges)?);
    }

    Ok(schedule)
}

/// Union of every category's ranges, merged again across categories.
pub fn union_of(schedule: &MergedSchedule) -> AppResult<Vec<TimeRange>> {
    let all: Vec<TimeRange> = schedule.values().flatten().copied().collect();
    if all.is_empty() {
        return Ok(Vec::new());
    }
    merge_ranges(&all)
}
