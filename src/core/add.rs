use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::HourRecord;
use crate::models::subject::canonical_subject;
use crate::storage::{append_record, unit_path};
use crate::ui::messages::success;
use crate::utils::date::parse_input_date;
use crate::utils::fmt_hours;
use std::path::PathBuf;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate a raw entry and turn it into a record.
    pub fn validate(
        cfg: &Config,
        name: &str,
        date: &str,
        hours: &str,
        subject: &str,
    ) -> AppResult<HourRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("name is required".into()));
        }

        let d = parse_input_date(date, &cfg.input_date_format)
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let h = hours
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidHours(format!("'{}' is not a valid number", hours)))?;
        if !h.is_finite() || h <= 0.0 {
            return Err(AppError::InvalidHours(format!(
                "'{}' must be a positive number",
                hours
            )));
        }

        let subj = canonical_subject(subject, &cfg.subjects).ok_or_else(|| {
            AppError::InvalidSubject(format!(
                "'{}'. Use one of: {}",
                subject,
                cfg.subjects.join(", ")
            ))
        })?;

        Ok(HourRecord::new(name, d, h, subj))
    }

    /// Append the entry to the person's storage unit.
    pub fn apply(
        cfg: &Config,
        name: &str,
        date: &str,
        hours: &str,
        subject: &str,
    ) -> AppResult<PathBuf> {
        let record = Self::validate(cfg, name, date, hours, subject)?;
        let path = unit_path(&cfg.data_path(), &record.person)?;

        append_record(&path, &record)?;

        success(format!(
            "Successfully logged {} hours for {}.",
            fmt_hours(record.hours),
            record.person
        ));

        Ok(path)
    }
}
