//! Idle gaps: the parts of a day window not covered by any occupied range.

use crate::core::calculator::merge::{is_merged, merge_ranges};
use crate::models::time_range::TimeRange;
use chrono::NaiveDateTime;

/// Complement of `occupied` inside `[day_start, day_end)`.
///
/// - no occupied ranges: the whole window is returned as one gap
/// - occupied covering the whole window: no gaps
///
/// Unsorted or overlapping input is merged first; ranges sticking out of
/// the window are clipped to it.
pub fn idle_gaps(
    occupied: &[TimeRange],
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
) -> Vec<TimeRange> {
    let window = TimeRange::new_unchecked(day_start, day_end);
    if !window.is_valid() {
        return Vec::new();
    }

    let clipped: Vec<TimeRange> = occupied
        .iter()
        .filter_map(|r| r.clip_to(&window))
        .collect();

    let merged = if clipped.is_empty() || is_merged(&clipped) {
        clipped
    } else {
        // non-empty here, so merging cannot fail
        merge_ranges(&clipped).unwrap_or_default()
    };

    let mut gaps = Vec::new();
    let mut cursor = day_start;

    for range in &merged {
        if cursor < range.start {
            gaps.push(TimeRange::new_unchecked(cursor, range.start));
        }
        cursor = cursor.max(range.end);
    }

    if cursor < day_end {
        gaps.push(TimeRange::new_unchecked(cursor, day_end));
    }

    gaps
}

/// Total idle minutes of a gap list.
pub fn idle_minutes(gaps: &[TimeRange]) -> i64 {
    gaps.iter().map(TimeRange::duration_minutes).sum()
}
