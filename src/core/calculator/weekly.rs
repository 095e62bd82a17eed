use crate::core::merge::MergedDataset;
use crate::models::WeeklyBucket;
use crate::utils::date::week_start;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Resample the dataset into Monday-anchored calendar weeks.
///
/// Each record counts toward the Monday on or before its date. Weeks without
/// records are left out, the rest come back in ascending order. Dates in the
/// first days of the calendar, which have no preceding Monday, land in the
/// `NaiveDate::MIN` bucket so the series still adds up to the total.
pub fn weekly_series(data: &MergedDataset) -> Vec<WeeklyBucket> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for rec in data.records() {
        let week = week_start(rec.date).unwrap_or(NaiveDate::MIN);
        *weeks.entry(week).or_insert(0.0) += rec.hours;
    }

    weeks
        .into_iter()
        .map(|(week_start, hours)| WeeklyBucket { week_start, hours })
        .collect()
}
