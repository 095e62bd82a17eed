use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportRun};
use crate::errors::AppResult;
use crate::models::AggregateReport;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{CYAN, GREEN, paint};
use crate::utils::date::format_date;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_percent};

/// Surface every unit and row that was left out of the report.
pub(crate) fn print_scan_issues(run: &ReportRun) {
    for unit in &run.skipped {
        warning(format!(
            "Could not read {}: {}",
            unit.path.display(),
            unit.reason
        ));
    }

    for row in &run.rejected {
        warning(format!(
            "Skipped row {} of {}: {}",
            row.line,
            row.path.display(),
            row.reason
        ));
    }
}

/// Explain why there is nothing to show. Returns `true` when the report has data.
pub(crate) fn has_data(run: &ReportRun, cfg: &Config) -> bool {
    if !run.root_present {
        info(format!(
            "The data folder '{}' was not found.",
            cfg.data_path().display()
        ));
        return false;
    }

    if run.units == 0 {
        info("No project data files (.csv) found.");
        return false;
    }

    if run.no_valid_data() {
        info("No valid data found in CSV files.");
        return false;
    }

    true
}

fn hours_table(first: &str, rows: impl Iterator<Item = (String, f64)>) -> String {
    let mut table = Table::new(vec![Column::left(first), Column::right("Total Hours")]);
    for (key, hours) in rows {
        table.add_row(vec![key, fmt_hours(hours)]);
    }
    table.render()
}

pub fn render(report: &AggregateReport) {
    println!(
        "\n{} {}",
        paint(&[CYAN], "Total Project Hours:"),
        paint(&[GREEN], fmt_hours(report.total_hours))
    );

    header("Hours by Team Member");
    print!(
        "{}",
        hours_table(
            "Name",
            report.hours_by_person.iter().map(|(k, v)| (k.clone(), *v))
        )
    );

    header("Hours by Subject");
    print!(
        "{}",
        hours_table(
            "Subject",
            report.hours_by_subject.iter().map(|(k, v)| (k.clone(), *v))
        )
    );

    header("Total Hours per Week");
    let mut weekly = Table::new(vec![Column::left("Week Start Date"), Column::right("Hours")]);
    for bucket in &report.weekly_series {
        weekly.add_row(vec![format_date(bucket.week_start), fmt_hours(bucket.hours)]);
    }
    print!("{}", weekly.render());

    header("Work Distribution by Member");
    let mut shares = Table::new(vec![Column::left("Name"), Column::right("Share")]);
    for (name, pct) in report.person_shares() {
        shares.add_row(vec![name.to_string(), fmt_percent(pct)]);
    }
    print!("{}", shares.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report = cmd {
        let run = ReportLogic::run(&cfg.data_path())?;
        print_scan_issues(&run);

        if has_data(&run, cfg) {
            render(&run.report);
        }
    }

    Ok(())
}
