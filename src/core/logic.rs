use crate::core::calculator::{aggregate, weekly};
use crate::core::merge::MergedDataset;
use crate::models::AggregateReport;

pub struct Core;

impl Core {
    /// Assemble the dashboard report from one merged dataset.
    pub fn build_report(data: &MergedDataset) -> AggregateReport {
        let totals = aggregate::calculate_totals(data);
        let weekly_series = weekly::weekly_series(data);

        AggregateReport {
            total_hours: totals.total_hours,
            hours_by_person: totals.hours_by_person,
            hours_by_subject: totals.hours_by_subject,
            weekly_series,
        }
    }
}
