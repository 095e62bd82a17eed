use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Every storage unit file name ends with this suffix.
pub const UNIT_SUFFIX: &str = "_hours.csv";

/// ASCII-only file name for a person's storage unit.
///
/// `"José Álvarez"` → `"jose_alvarez_hours.csv"`
pub fn unit_file_name(name: &str) -> AppResult<String> {
    let ascii: String = name.nfd().filter(char::is_ascii).collect();
    let base: String = ascii
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    if base.is_empty() || base.chars().all(|c| c == '_' || c == '.') {
        return Err(AppError::InvalidName(format!(
            "'{}' does not contain any usable character for a file name",
            name
        )));
    }

    Ok(format!("{base}{UNIT_SUFFIX}"))
}

pub fn unit_path(root: &Path, name: &str) -> AppResult<PathBuf> {
    Ok(root.join(unit_file_name(name)?))
}

pub(crate) fn is_unit_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(UNIT_SUFFIX))
}
