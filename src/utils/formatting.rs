//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Hours are always shown with two decimals.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn fmt_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Pad to a display width; names may carry accents or wide glyphs.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}
