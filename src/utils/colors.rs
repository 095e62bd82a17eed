/// ANSI color helper utilities for terminal output.
use std::env;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Colour is on unless `NO_COLOR` is set to a non-empty value.
pub fn enabled() -> bool {
    env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// Wrap `text` in the given styles, or return it bare when colour is off.
pub fn paint(styles: &[&str], text: impl std::fmt::Display) -> String {
    if enabled() {
        format!("{}{text}{RESET}", styles.concat())
    } else {
        text.to_string()
    }
}
