// src/export/model.rs

use crate::models::AggregateReport;
use serde::Serialize;

/// One row of the per-person summary.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PersonSummary {
    pub name: String,
    pub total_hours: f64,
}

pub(crate) fn person_summary(report: &AggregateReport) -> Vec<PersonSummary> {
    report
        .hours_by_person
        .iter()
        .map(|(name, hours)| PersonSummary {
            name: name.clone(),
            total_hours: *hours,
        })
        .collect()
}
