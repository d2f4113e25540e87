use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display / parse format for range boundaries ("2022-04-30 08:00").
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

/// Half-open time span `[start, end)`.
///
/// Plain value type: every operation returns a new range, nothing is shared
/// between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Validating constructor: `start` must be strictly before `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        let range = Self { start, end };
        if !range.is_valid() {
            return Err(AppError::InvalidRange(range.to_string()));
        }
        Ok(range)
    }

    /// Builds a range without checking the ordering (raw input data).
    pub fn new_unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parses two "YYYY-MM-DD HH:MM" strings. Ordering is not checked.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Ok(Self::new_unchecked(
            parse_datetime(start)?,
            parse_datetime(end)?,
        ))
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Calendar day owning this range (the day it starts on).
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// True when both ranges share some positive-length time.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the ranges overlap or are exactly adjacent.
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// A range crosses a day boundary when it ends after the midnight that
    /// closes its start day. Ending exactly at that midnight is allowed.
    pub fn crosses_day_boundary(&self) -> bool {
        self.end > day_end(self.day())
    }

    /// Intersection with `window`, or `None` when nothing positive remains.
    pub fn clip_to(&self, window: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start < end).then_some(TimeRange { start, end })
    }

    /// Cuts the range at every midnight it spans.
    /// Each returned piece lies inside a single day.
    pub fn split_by_day(&self) -> Vec<TimeRange> {
        let mut pieces = Vec::new();
        if !self.is_valid() {
            return pieces;
        }

        let mut cursor = self.start;
        while cursor < self.end {
            let cut = day_end(cursor.date()).min(self.end);
            pieces.push(TimeRange {
                start: cursor,
                end: cut,
            });
            cursor = cut;
        }

        pieces
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.start.format(DATETIME_FMT),
            self.end.format(DATETIME_FMT)
        )
    }
}

/// Midnight opening `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Midnight closing `day` (i.e. the start of the following day).
pub fn day_end(day: NaiveDate) -> NaiveDateTime {
    day_start(day) + Duration::hours(24)
}

/// The 24-hour window of `day`.
pub fn day_window(day: NaiveDate) -> TimeRange {
    TimeRange {
        start: day_start(day),
        end: day_end(day),
    }
}

pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FMT)
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}
