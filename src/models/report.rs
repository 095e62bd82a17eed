use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Hours attributed to the calendar week starting on `week_start` (a Monday).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyBucket {
    pub week_start: NaiveDate,
    pub hours: f64,
}

/// Everything the dashboard needs for one refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_hours: f64,
    pub hours_by_person: BTreeMap<String, f64>,
    pub hours_by_subject: BTreeMap<String, f64>,
    pub weekly_series: Vec<WeeklyBucket>,
}

impl AggregateReport {
    pub fn is_empty(&self) -> bool {
        self.hours_by_person.is_empty()
    }

    /// Share of the total logged by each person, in percent.
    pub fn person_shares(&self) -> Vec<(&str, f64)> {
        if self.total_hours <= 0.0 {
            return Vec::new();
        }

        self.hours_by_person
            .iter()
            .map(|(name, hours)| (name.as_str(), hours / self.total_hours * 100.0))
            .collect()
    }
}
