use super::time_range::TimeRange;
use serde::{Deserialize, Serialize};

/// Shift / role type a record belongs to (e.g. "0002" = ENT doctor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One worker assigned to one time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub category: Category,
    pub worker: String,
    pub range: TimeRange,
}

impl ShiftRecord {
    pub fn new(category: Category, worker: impl Into<String>, range: TimeRange) -> Self {
        Self {
            category,
            worker: worker.into(),
            range,
        }
    }

    pub fn code(&self) -> &str {
        &self.category.code
    }

    /// Same record restricted to `range`. Used when a shift has to be
    /// clipped to its owning day; the original record is left untouched.
    pub fn with_range(&self, range: TimeRange) -> Self {
        Self {
            category: self.category.clone(),
            worker: self.worker.clone(),
            range,
        }
    }
}
