//! Status lines shown to the user.
//!
//! Every line carries a level icon; errors go to stderr, the rest to stdout.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, YELLOW, paint};
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => BLUE,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let line = format!("{} {msg}", paint(&[level.color(), BOLD], level.icon()));
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Dashboard section title.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}", paint(&[BLUE, BOLD], format!("== {msg} ==")));
}
