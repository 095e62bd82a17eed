#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hourtrack::models::HourRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, isolated from the user's own config file.
pub fn ht() -> Command {
    let mut cmd = cargo_bin_cmd!("hourtrack");
    cmd.env(
        "HOURTRACK_CONFIG",
        std::env::temp_dir()
            .join("hourtrack-tests-no-config")
            .join("hourtrack.conf"),
    );
    cmd
}

/// Fresh, empty data folder that is removed when dropped.
pub fn data_dir() -> TempDir {
    tempfile::tempdir().expect("create temp data dir")
}

pub fn data_arg(dir: &TempDir) -> String {
    dir.path().to_string_lossy().to_string()
}

/// Write a raw storage unit (`<stem>_hours.csv`) into `dir`.
pub fn write_unit(dir: &Path, stem: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("{stem}_hours.csv"));
    fs::write(&path, content).expect("write unit");
    path
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn rec(person: &str, d: &str, hours: f64, subject: &str) -> HourRecord {
    HourRecord::new(person, date(d), hours, subject)
}

/// The three-record team used across the report tests.
pub fn write_sample_team(dir: &Path) {
    write_unit(
        dir,
        "alice",
        "name,date,hours,subject\n\
         Alice,2025-01-06,3.0,Meetings\n\
         Alice,2025-01-08,2.0,Meetings\n",
    );
    write_unit(
        dir,
        "bob",
        "name,date,hours,subject\n\
         Bob,2025-01-06,5.0,Technical Work\n",
    );
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
