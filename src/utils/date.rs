use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// ISO weekday, Monday = 0 ... Sunday = 6.
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Key used for day buckets ("YYYY-MM-DD").
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short label under the weekday name ("04-30").
pub fn short_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// The seven days (Monday to Sunday) a chart displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// ISO week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(weekday_of(date) as i64);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn current() -> Self {
        Self::containing(today())
    }

    /// Parses any "YYYY-MM-DD" inside the wanted week.
    pub fn parse(s: &str) -> AppResult<Self> {
        parse_date(s)
            .map(Self::containing)
            .ok_or_else(|| AppError::InvalidDate(s.to_string()))
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(7).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
