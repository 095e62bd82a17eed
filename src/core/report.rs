use crate::core::logic::Core;
use crate::core::merge::MergedDataset;
use crate::errors::AppResult;
use crate::models::AggregateReport;
use crate::storage::{RejectedRow, SkippedUnit, StoreScan, reader};
use std::path::Path;

/// One dashboard refresh: the report plus what had to be left out.
#[derive(Debug)]
pub struct ReportRun {
    pub report: AggregateReport,
    pub root_present: bool,
    pub units: usize,
    pub skipped: Vec<SkippedUnit>,
    pub rejected: Vec<RejectedRow>,
}

impl ReportRun {
    /// True when units were found but none of them produced a record.
    pub fn no_valid_data(&self) -> bool {
        self.units > 0 && self.report.is_empty()
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Read every storage unit under `root` and build a fresh report.
    ///
    /// Nothing is cached: two calls over an unchanged folder return identical
    /// reports.
    pub fn run(root: &Path) -> AppResult<ReportRun> {
        let scan = reader::scan(root)?;
        Ok(Self::from_scan(scan))
    }

    pub fn from_scan(scan: StoreScan) -> ReportRun {
        let units = scan.unit_count();
        let data = MergedDataset::merge(scan.sets);

        ReportRun {
            report: Core::build_report(&data),
            root_present: scan.root_present,
            units,
            skipped: scan.skipped,
            rejected: scan.rejected,
        }
    }
}
