use chrono::{Datelike, Days, NaiveDate};

/// Storage and display format for dates.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Four-digit years only; anything else cannot round-trip through storage.
fn in_storage_range(d: NaiveDate) -> bool {
    (1..=9999).contains(&d.year())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
        .ok()
        .filter(|d| in_storage_range(*d))
}

/// Parse a date typed by the user: the configured format first, then ISO.
pub fn parse_input_date(s: &str, format: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .ok()
        .filter(|d| in_storage_range(*d))
        .or_else(|| parse_date(s))
}

/// Monday on or before `date`, `None` when that Monday is not representable.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(
        date.weekday().num_days_from_monday(),
    )))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(ISO_FORMAT).to_string()
}
