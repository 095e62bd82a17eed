//! Record store reader.
//!
//! Turns the data folder into one [`RecordSet`] per storage unit. A broken
//! unit never aborts the scan: it is recorded as a [`SkippedUnit`] and the
//! next one is read. Rows that fail to decode are dropped individually and
//! recorded as [`RejectedRow`]s.

use crate::errors::{AppError, AppResult};
use crate::models::{HourRecord, RecordSet};
use crate::storage::naming::is_unit_file;
use crate::utils::date::parse_date;
use csv::StringRecord;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Why a whole storage unit was left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unreadable(String),
    Malformed(String),
    MissingColumn(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(e) => write!(f, "unreadable: {e}"),
            SkipReason::Malformed(e) => write!(f, "malformed CSV: {e}"),
            SkipReason::MissingColumn(col) => write!(f, "missing required column '{col}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUnit {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Why a single row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    EmptyField(&'static str),
    InvalidDate(String),
    InvalidHours(String),
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::EmptyField(col) => write!(f, "empty '{col}'"),
            RowIssue::InvalidDate(v) => write!(f, "invalid date '{v}'"),
            RowIssue::InvalidHours(v) => write!(f, "hours must be a positive number, got '{v}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub path: PathBuf,
    pub line: u64,
    pub reason: RowIssue,
}

/// Result of reading the whole data folder once.
#[derive(Debug, Default)]
pub struct StoreScan {
    /// `false` when the data folder does not exist yet.
    pub root_present: bool,
    pub sets: Vec<RecordSet>,
    pub skipped: Vec<SkippedUnit>,
    pub rejected: Vec<RejectedRow>,
}

impl StoreScan {
    /// Number of storage units found, readable or not.
    pub fn unit_count(&self) -> usize {
        self.sets.len() + self.skipped.len()
    }
}

/// Positions of the required columns inside a unit's header.
struct Columns {
    person: usize,
    date: usize,
    hours: usize,
    subject: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, SkipReason> {
        Ok(Self {
            person: position(headers, &["name", "person"])
                .ok_or(SkipReason::MissingColumn("name"))?,
            date: position(headers, &["date"]).ok_or(SkipReason::MissingColumn("date"))?,
            hours: position(headers, &["hours"]).ok_or(SkipReason::MissingColumn("hours"))?,
            subject: position(headers, &["subject"])
                .ok_or(SkipReason::MissingColumn("subject"))?,
        })
    }

    fn decode(&self, row: &StringRecord) -> Result<HourRecord, RowIssue> {
        let person = field(row, self.person);
        if person.trim().is_empty() {
            return Err(RowIssue::EmptyField("name"));
        }

        let subject = field(row, self.subject);
        if subject.trim().is_empty() {
            return Err(RowIssue::EmptyField("subject"));
        }

        let raw_date = field(row, self.date);
        let date = parse_date(raw_date).ok_or_else(|| RowIssue::InvalidDate(raw_date.into()))?;

        let raw_hours = field(row, self.hours);
        let hours = raw_hours
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h > 0.0)
            .ok_or_else(|| RowIssue::InvalidHours(raw_hours.into()))?;

        Ok(HourRecord::new(person, date, hours, subject))
    }
}

fn position(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn classify(e: csv::Error) -> SkipReason {
    if e.is_io_error() {
        SkipReason::Unreadable(e.to_string())
    } else {
        SkipReason::Malformed(e.to_string())
    }
}

/// A decoded unit together with the rows it had to drop.
#[derive(Debug)]
pub struct UnitRead {
    pub set: RecordSet,
    pub rejected: Vec<RejectedRow>,
}

/// Decode one storage unit.
pub fn read_unit(path: &Path) -> Result<UnitRead, SkipReason> {
    let file = File::open(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(BufReader::new(file));

    let headers = rdr.headers().map_err(classify)?.clone();
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for row in rdr.records() {
        let row = row.map_err(classify)?;

        match columns.decode(&row) {
            Ok(rec) => records.push(rec),
            Err(reason) => rejected.push(RejectedRow {
                path: path.to_path_buf(),
                line: row.position().map(|p| p.line()).unwrap_or(0),
                reason,
            }),
        }
    }

    Ok(UnitRead {
        set: RecordSet::new(path, records),
        rejected,
    })
}

/// List the storage units under `root`, sorted by path.
///
/// Directories are ignored; anything else with a unit name is listed, so a
/// dangling link surfaces later as an unreadable unit instead of vanishing.
/// `Ok(None)` means the folder does not exist yet.
pub fn list_units(root: &Path) -> AppResult<Option<Vec<PathBuf>>> {
    let no_source = |e: io::Error| AppError::NoDataSource {
        path: root.to_path_buf(),
        reason: e.to_string(),
    };

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(no_source(e)),
    };

    let mut units = Vec::new();
    for entry in entries {
        let path = entry.map_err(no_source)?.path();
        if !path.is_dir() && is_unit_file(&path) {
            units.push(path);
        }
    }
    units.sort();

    Ok(Some(units))
}

/// Read every storage unit under `root`.
pub fn scan(root: &Path) -> AppResult<StoreScan> {
    let Some(units) = list_units(root)? else {
        return Ok(StoreScan::default());
    };

    let mut out = StoreScan {
        root_present: true,
        ..Default::default()
    };

    for path in units {
        match read_unit(&path) {
            Ok(unit) => {
                out.rejected.extend(unit.rejected);
                out.sets.push(unit.set);
            }
            Err(reason) => out.skipped.push(SkippedUnit { path, reason }),
        }
    }

    Ok(out)
}
