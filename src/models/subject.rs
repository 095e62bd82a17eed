/// Work categories offered when logging hours.
///
/// The list is advisory: reports group on whatever subject text is stored.
pub const SUBJECT_OPTIONS: [&str; 5] = [
    "Technical Work",
    "Meetings",
    "Data Annotation",
    "Documentation",
    "Training Models",
];

pub fn default_subjects() -> Vec<String> {
    SUBJECT_OPTIONS.iter().map(|s| s.to_string()).collect()
}

/// Match user input against the allowed subjects, case-insensitively.
/// Returns the canonical spelling.
pub fn canonical_subject<'a>(input: &str, allowed: &'a [String]) -> Option<&'a str> {
    let wanted = input.trim();
    allowed
        .iter()
        .find(|s| s.eq_ignore_ascii_case(wanted))
        .map(String::as_str)
}
