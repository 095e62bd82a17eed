use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One logged work session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourRecord {
    pub person: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub subject: String,
}

impl HourRecord {
    pub fn new(person: &str, date: NaiveDate, hours: f64, subject: &str) -> Self {
        Self {
            person: person.to_string(),
            date,
            hours,
            subject: subject.to_string(),
        }
    }
}

/// Records decoded from a single storage unit, in file order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    source: PathBuf,
    records: Vec<HourRecord>,
}

impl RecordSet {
    pub fn new(source: impl Into<PathBuf>, records: Vec<HourRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[HourRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<HourRecord> {
        self.records
    }
}
