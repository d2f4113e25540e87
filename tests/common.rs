#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use shiftchart::models::shift_record::{Category, ShiftRecord};
use shiftchart::models::time_range::TimeRange;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("shiftchart")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Range on the same day: `range("2022-04-25", "08:00", "10:00")`.
pub fn range(day: &str, start: &str, end: &str) -> TimeRange {
    TimeRange::new_unchecked(
        dt(&format!("{day} {start}")),
        dt(&format!("{day} {end}")),
    )
}

pub fn shift(code: &str, worker: &str, r: TimeRange) -> ShiftRecord {
    ShiftRecord::new(Category::new(code, format!("cat {code}")), worker, r)
}

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftchart.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes a small JSON dataset for the week of 2022-04-25 (Mon) .. 2022-05-01 (Sun)
pub fn write_sample_json(name: &str) -> String {
    let path = temp_path(name, "json");
    let data = r#"[
  { "category": { "code": "0001", "name": "Ophthalmology" }, "worker": "w1",
    "start": "2022-04-25 08:00", "end": "2022-04-25 10:00" },
  { "category": { "code": "0001", "name": "Ophthalmology" }, "worker": "w2",
    "start": "2022-04-25 09:00", "end": "2022-04-25 12:00" },
  { "category": { "code": "0002", "name": "ENT" }, "worker": "w3",
    "start": "2022-04-25 14:00", "end": "2022-04-25 16:00" },
  { "category": { "code": "0002", "name": "ENT" }, "worker": "w4",
    "start": "2022-04-30 00:00", "end": "2022-04-30 23:59" },
  { "category": { "code": "0003", "name": "Rhinology" }, "worker": "w5",
    "start": "2022-04-27 12:00", "end": "2022-04-27 12:00" }
]"#;
    fs::write(&path, data).expect("write sample json");
    path
}

/// Minimal config file with a custom title; everything else defaults.
pub fn write_config(name: &str, body: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, body).expect("write config");
    path
}
