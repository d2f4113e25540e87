//! Reads shift records from JSON or CSV files.
//!
//! Timestamps use "YYYY-MM-DD HH:MM". Reversed or empty ranges are kept
//! as-is here; grouping discards them later.

use crate::errors::{AppError, AppResult};
use crate::models::shift_record::{Category, ShiftRecord};
use crate::models::time_range::TimeRange;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// JSON input shape.
#[derive(Debug, Deserialize)]
struct RawShift {
    category: Category,
    #[serde(default)]
    worker: String,
    start: String,
    end: String,
}

/// CSV input row: `code,name,worker,start,end`.
#[derive(Debug, Deserialize)]
struct RawCsvShift {
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    worker: String,
    start: String,
    end: String,
}

impl RawShift {
    fn into_record(self) -> AppResult<ShiftRecord> {
        let range = TimeRange::parse(&self.start, &self.end)?;
        Ok(ShiftRecord::new(self.category, self.worker, range))
    }
}

impl RawCsvShift {
    fn into_record(self) -> AppResult<ShiftRecord> {
        let range = TimeRange::parse(&self.start, &self.end)?;
        Ok(ShiftRecord::new(
            Category::new(self.code, self.name),
            self.worker,
            range,
        ))
    }
}

/// Load records from `path`, choosing the parser from the extension.
pub fn load_records(path: &Path) -> AppResult<Vec<ShiftRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => parse_json(&fs::read_to_string(path)?),
        "csv" => parse_csv(fs::File::open(path)?),
        other => Err(AppError::InvalidInputFormat(format!(
            "{} (extension '{other}', expected .json or .csv)",
            path.display()
        ))),
    }
}

pub fn parse_json(content: &str) -> AppResult<Vec<ShiftRecord>> {
    let raw: Vec<RawShift> = serde_json::from_str(content)?;
    raw.into_iter().map(RawShift::into_record).collect()
}

pub fn parse_csv<R: Read>(reader: R) -> AppResult<Vec<ShiftRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut out = Vec::new();
    for row in rdr.deserialize::<RawCsvShift>() {
        out.push(row?.into_record()?);
    }
    Ok(out)
}
