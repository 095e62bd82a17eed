// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::person_summary;
use crate::models::AggregateReport;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file`.
    ///
    /// - `csv`: hours per person (`name,total_hours`)
    /// - `json`: the full report
    ///
    /// Callers decide beforehand whether there is anything worth exporting;
    /// an empty report is written as is.
    pub fn export(
        report: &AggregateReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_absolute(path)?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&person_summary(report), path)?,
            ExportFormat::Json => export_json(report, path)?,
        }

        Ok(())
    }
}
