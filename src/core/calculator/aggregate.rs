use crate::core::merge::MergedDataset;
use crate::models::HourRecord;
use std::collections::BTreeMap;

/// Grouped sums over a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub total_hours: f64,
    pub hours_by_person: BTreeMap<String, f64>,
    pub hours_by_subject: BTreeMap<String, f64>,
}

/// Sum `hours` per distinct key, keys compared verbatim.
pub fn sum_by<F>(records: &[HourRecord], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&HourRecord) -> &str,
{
    let mut out: BTreeMap<String, f64> = BTreeMap::new();
    for rec in records {
        *out.entry(key(rec).to_string()).or_insert(0.0) += rec.hours;
    }
    out
}

pub fn total_hours(records: &[HourRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| acc + r.hours)
}

pub fn calculate_totals(data: &MergedDataset) -> Totals {
    let records = data.records();

    Totals {
        total_hours: total_hours(records),
        hours_by_person: sum_by(records, |r| r.person.as_str()),
        hours_by_subject: sum_by(records, |r| r.subject.as_str()),
    }
}
