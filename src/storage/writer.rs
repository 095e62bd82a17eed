use crate::errors::AppResult;
use crate::models::HourRecord;
use crate::storage::UNIT_HEADER;
use crate::utils::date::format_date;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Whether a non-empty unit is missing its final line break.
fn lacks_trailing_newline(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Append one record to a storage unit, writing the header first when the
/// unit does not exist yet (or is empty).
///
/// A unit edited by hand may end without a line break; one is added first so
/// the new row does not merge into the last one.
pub fn append_record(path: &Path, record: &HourRecord) -> AppResult<()> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let needs_break = !needs_header && lacks_trailing_newline(path)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_break {
        file.write_all(b"\n")?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        wtr.write_record(UNIT_HEADER)?;
    }

    wtr.write_record([
        record.person.as_str(),
        format_date(record.date).as_str(),
        record.hours.to_string().as_str(),
        record.subject.as_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}
