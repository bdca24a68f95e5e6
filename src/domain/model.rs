use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One CSV row, keyed by the header row's column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, String>,
}

impl RawRecord {
    pub fn field(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }
}

/// Calendar date as parsed from the export. `month` is 1-based here;
/// the zero-based shift happens when the output record is assembled.
///
/// Components are plain integers on purpose: the export's date field is
/// not range-checked, so a month of 13 passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// One converted workout in the nadamillas import format.
///
/// `month` is zero-based (0 = January), which is what the consuming
/// application expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: u64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub distance: u32,
    pub seconds_used: u32,
    pub pool: bool,
}

impl Workout {
    /// One-line rendering used for the per-record progress output,
    /// e.g. `2023-11-21 pool: 5200 @ 6146 s`.
    pub fn summary(&self) -> String {
        format!(
            "{:04}-{:02}-{:02} {}: {} @ {} s",
            self.year,
            self.month + 1,
            self.day,
            if self.pool { "pool" } else { "ows" },
            self.distance,
            self.seconds_used
        )
    }
}

/// The full output document, serialized as `{"workouts": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub workouts: Vec<Workout>,
}
