use crate::errors::AppResult;
use crate::storage::reader;
use std::collections::BTreeSet;
use std::path::Path;

/// Sorted, de-duplicated names of everyone who logged hours so far.
///
/// Unreadable units are ignored.
pub fn known_names(root: &Path) -> AppResult<Vec<String>> {
    let scan = reader::scan(root)?;

    let names: BTreeSet<String> = scan
        .sets
        .iter()
        .flat_map(|set| set.records().iter().map(|r| r.person.clone()))
        .collect();

    Ok(names.into_iter().collect())
}
