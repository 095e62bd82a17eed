//! Per-person flat-file storage.
//!
//! Every person owns one CSV file (`<name>_hours.csv`) inside the data
//! folder. The reader turns the folder into record sets, the writer appends
//! new entries.

pub mod naming;
pub mod reader;
pub mod writer;

pub use naming::{UNIT_SUFFIX, unit_file_name, unit_path};
pub use reader::{RejectedRow, RowIssue, SkipReason, SkippedUnit, StoreScan, scan};
pub use writer::append_record;

/// Header written at the top of every new storage unit.
pub const UNIT_HEADER: [&str; 4] = ["name", "date", "hours", "subject"];
