mod common;
use common::{approx, date, rec, write_sample_team, write_unit};

use hourtrack::core::calculator::{aggregate, weekly};
use hourtrack::core::logic::Core;
use hourtrack::core::merge::MergedDataset;
use hourtrack::core::report::ReportLogic;
use hourtrack::errors::AppError;
use hourtrack::models::{AggregateReport, HourRecord};
use hourtrack::storage::{RowIssue, SkipReason, reader};
use hourtrack::utils::date::week_start;
use chrono::NaiveDate;

fn sum(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |a, b| a + b)
}

fn assert_consistent(report: &AggregateReport) {
    assert!(approx(sum(report.hours_by_person.values().copied()), report.total_hours));
    assert!(approx(sum(report.hours_by_subject.values().copied()), report.total_hours));
    assert!(approx(
        sum(report.weekly_series.iter().map(|b| b.hours)),
        report.total_hours
    ));
}

#[test]
fn test_sample_team_report() {
    let dir = common::data_dir();
    write_sample_team(dir.path());

    let run = ReportLogic::run(dir.path()).expect("report");
    let r = &run.report;

    assert!(run.skipped.is_empty());
    assert!(run.rejected.is_empty());
    assert_eq!(run.units, 2);

    assert!(approx(r.total_hours, 10.0));
    assert_eq!(r.hours_by_person.len(), 2);
    assert!(approx(r.hours_by_person["Alice"], 5.0));
    assert!(approx(r.hours_by_person["Bob"], 5.0));
    assert!(approx(r.hours_by_subject["Meetings"], 5.0));
    assert!(approx(r.hours_by_subject["Technical Work"], 5.0));

    assert_eq!(r.weekly_series.len(), 1);
    assert_eq!(r.weekly_series[0].week_start, date("2025-01-06"));
    assert!(approx(r.weekly_series[0].hours, 10.0));

    assert_consistent(r);
}

#[test]
fn test_two_weeks_are_ordered() {
    let data = MergedDataset::from(vec![
        rec("Bob", "2025-01-13", 1.5, "Documentation"),
        rec("Alice", "2025-01-06", 4.0, "Meetings"),
    ]);

    let series = weekly::weekly_series(&data);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].week_start, date("2025-01-06"));
    assert!(approx(series[0].hours, 4.0));
    assert_eq!(series[1].week_start, date("2025-01-13"));
    assert!(approx(series[1].hours, 1.5));
}

#[test]
fn test_week_runs_monday_to_sunday() {
    assert_eq!(week_start(date("2025-01-06")), Some(date("2025-01-06")));
    assert_eq!(week_start(date("2025-01-08")), Some(date("2025-01-06")));
    assert_eq!(week_start(date("2025-01-12")), Some(date("2025-01-06")));
    assert_eq!(week_start(date("2025-01-13")), Some(date("2025-01-13")));
    // across a year boundary
    assert_eq!(week_start(date("2025-01-01")), Some(date("2024-12-30")));
}

#[test]
fn test_week_start_at_calendar_edge() {
    // a Thursday with no representable Monday before it
    let edge = NaiveDate::parse_from_str("-262143-01-01", "%Y-%m-%d").unwrap();
    assert_eq!(week_start(edge), None);

    let data = MergedDataset::from(vec![
        HourRecord::new("Old", edge, 1.0, "Meetings"),
        rec("Alice", "2025-01-06", 2.0, "Meetings"),
    ]);

    let series = weekly::weekly_series(&data);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].week_start, NaiveDate::MIN);
    assert!(approx(sum(series.iter().map(|b| b.hours)), 3.0));
}

#[test]
fn test_out_of_range_dates_are_rejected_not_fatal() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    write_unit(
        dir.path(),
        "old",
        "name,date,hours,subject\n\
         Old,-262143-01-01,1,Meetings\n\
         Old,+10000-01-03,1,Meetings\n\
         Old,2025-01-07,1,Meetings\n",
    );

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(run.skipped.is_empty());
    assert_eq!(run.rejected.len(), 2);
    assert!(
        run.rejected
            .iter()
            .all(|r| matches!(r.reason, RowIssue::InvalidDate(_)))
    );
    assert!(approx(run.report.total_hours, 11.0));
    assert_eq!(run.report.weekly_series.len(), 1);
}

#[test]
fn test_rows_with_empty_name_or_subject_are_rejected() {
    let dir = common::data_dir();
    write_unit(
        dir.path(),
        "kim",
        "name,date,hours,subject\n\
         Kim,2025-01-06,2,Meetings\n\
         ,2025-01-06,1,Meetings\n\
         \"  \",2025-01-06,1,Meetings\n\
         Kim,2025-01-07,1,\n\
         Kim,2025-01-07,1,\"   \"\n",
    );

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(run.skipped.is_empty());
    let reasons: Vec<RowIssue> = run.rejected.iter().map(|r| r.reason.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            RowIssue::EmptyField("name"),
            RowIssue::EmptyField("name"),
            RowIssue::EmptyField("subject"),
            RowIssue::EmptyField("subject"),
        ]
    );
    assert_eq!(run.rejected[0].line, 3);
    assert!(approx(run.report.total_hours, 2.0));
}

#[test]
fn test_unit_that_cannot_be_opened_is_unreadable() {
    let dir = common::data_dir();
    let path = dir.path().join("ghost_hours.csv");

    let err = reader::read_unit(&path).unwrap_err();
    assert!(matches!(err, SkipReason::Unreadable(_)));
}

#[cfg(unix)]
#[test]
fn test_dangling_unit_link_is_skipped_as_unreadable() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    std::os::unix::fs::symlink(
        dir.path().join("gone.csv"),
        dir.path().join("ghost_hours.csv"),
    )
    .unwrap();

    let run = ReportLogic::run(dir.path()).expect("report");

    assert_eq!(run.units, 3);
    assert_eq!(run.skipped.len(), 1);
    assert!(run.skipped[0].path.ends_with("ghost_hours.csv"));
    assert!(matches!(run.skipped[0].reason, SkipReason::Unreadable(_)));
    assert!(approx(run.report.total_hours, 10.0));
}

#[test]
fn test_gaps_between_weeks_are_not_zero_filled() {
    let data = MergedDataset::from(vec![
        rec("Alice", "2025-01-07", 2.0, "Meetings"),
        rec("Alice", "2025-02-05", 3.0, "Meetings"),
    ]);

    let series = weekly::weekly_series(&data);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].week_start, date("2025-01-06"));
    assert_eq!(series[1].week_start, date("2025-02-03"));
}

#[test]
fn test_single_day_gives_one_week() {
    let data = MergedDataset::from(vec![
        rec("Alice", "2025-03-05", 1.0, "Meetings"),
        rec("Bob", "2025-03-05", 2.0, "Meetings"),
    ]);

    let series = weekly::weekly_series(&data);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].week_start, date("2025-03-03"));
}

#[test]
fn test_empty_dataset_gives_empty_report() {
    let report = Core::build_report(&MergedDataset::default());

    assert_eq!(report.total_hours, 0.0);
    assert!(report.total_hours.is_sign_positive());
    assert!(report.hours_by_person.is_empty());
    assert!(report.hours_by_subject.is_empty());
    assert!(report.weekly_series.is_empty());
    assert!(report.person_shares().is_empty());
}

#[test]
fn test_missing_data_folder_is_not_an_error() {
    let dir = common::data_dir();
    let missing = dir.path().join("not_there");

    let run = ReportLogic::run(&missing).expect("missing folder is 'no data yet'");

    assert!(!run.root_present);
    assert_eq!(run.units, 0);
    assert!(run.report.is_empty());
}

#[test]
fn test_data_folder_that_is_a_file_is_no_data_source() {
    let dir = common::data_dir();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "not a folder").unwrap();

    let err = ReportLogic::run(&file).unwrap_err();
    assert!(matches!(err, AppError::NoDataSource { .. }));
}

#[test]
fn test_corrupt_unit_is_skipped() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    write_unit(dir.path(), "carol", "name,date,hours,subject\nCarol,2025-01-06\n");

    let run = ReportLogic::run(dir.path()).expect("report");

    assert_eq!(run.units, 3);
    assert_eq!(run.skipped.len(), 1);
    assert!(run.skipped[0].path.ends_with("carol_hours.csv"));
    assert!(matches!(run.skipped[0].reason, SkipReason::Malformed(_)));

    assert!(approx(run.report.total_hours, 10.0));
    assert!(!run.report.hours_by_person.contains_key("Carol"));
}

#[test]
fn test_unit_missing_column_is_skipped() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    write_unit(dir.path(), "dave", "name,date,subject\nDave,2025-01-06,Meetings\n");

    let run = ReportLogic::run(dir.path()).expect("report");

    assert_eq!(run.skipped.len(), 1);
    assert_eq!(run.skipped[0].reason, SkipReason::MissingColumn("hours"));
    assert!(approx(run.report.total_hours, 10.0));
}

#[test]
fn test_empty_file_is_skipped_and_header_only_is_empty() {
    let dir = common::data_dir();
    write_unit(dir.path(), "empty", "");
    write_unit(dir.path(), "header_only", "name,date,hours,subject\n");

    let run = ReportLogic::run(dir.path()).expect("report");

    assert_eq!(run.units, 2);
    assert_eq!(run.skipped.len(), 1);
    assert!(run.skipped[0].path.ends_with("empty_hours.csv"));
    assert!(run.no_valid_data());
    assert!(run.report.is_empty());
}

#[test]
fn test_invalid_rows_are_rejected_individually() {
    let dir = common::data_dir();
    write_unit(
        dir.path(),
        "erin",
        "name,date,hours,subject\n\
         Erin,2025-01-06,2.5,Meetings\n\
         Erin,06/01/2025,1.0,Meetings\n\
         Erin,2025-01-07,0,Meetings\n\
         Erin,2025-01-07,-3,Meetings\n\
         Erin,2025-01-07,abc,Meetings\n\
         Erin,2025-01-08,1.5,Documentation\n",
    );

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(run.skipped.is_empty());
    assert_eq!(run.rejected.len(), 4);
    assert_eq!(run.rejected[0].line, 3);
    assert!(matches!(run.rejected[0].reason, RowIssue::InvalidDate(_)));
    assert!(matches!(run.rejected[1].reason, RowIssue::InvalidHours(_)));
    assert!(matches!(run.rejected[2].reason, RowIssue::InvalidHours(_)));
    assert!(matches!(run.rejected[3].reason, RowIssue::InvalidHours(_)));

    assert!(approx(run.report.total_hours, 4.0));
    assert!(approx(run.report.hours_by_subject["Documentation"], 1.5));
}

#[test]
fn test_columns_in_any_order_and_person_alias() {
    let dir = common::data_dir();
    write_unit(
        dir.path(),
        "frank",
        "subject,hours,person,date,note\nMeetings,2,Frank,2025-01-06,standup\n",
    );

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(run.skipped.is_empty());
    assert!(approx(run.report.hours_by_person["Frank"], 2.0));
}

#[test]
fn test_only_hours_files_are_units() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    std::fs::write(dir.path().join("notes.csv"), "garbage").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "hello").unwrap();

    let run = ReportLogic::run(dir.path()).expect("report");

    assert_eq!(run.units, 2);
    assert!(run.skipped.is_empty());
}

#[test]
fn test_identical_rows_from_different_units_are_kept() {
    let dir = common::data_dir();
    let row = "name,date,hours,subject\nAlice,2025-01-06,3.0,Meetings\n";
    write_unit(dir.path(), "alice", row);
    write_unit(dir.path(), "alice_copy", row);

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(approx(run.report.total_hours, 6.0));
    assert!(approx(run.report.hours_by_person["Alice"], 6.0));
}

#[test]
fn test_grouping_keys_are_exact() {
    let data = MergedDataset::from(vec![
        rec("Alice", "2025-01-06", 1.0, "Meetings"),
        rec("alice", "2025-01-06", 1.0, "meetings"),
        rec("Alice ", "2025-01-06", 1.0, "Meetings"),
    ]);

    let totals = aggregate::calculate_totals(&data);

    assert_eq!(totals.hours_by_person.len(), 3);
    assert_eq!(totals.hours_by_subject.len(), 2);
    assert!(approx(totals.hours_by_subject["Meetings"], 2.0));
}

#[test]
fn test_unknown_subjects_are_grouped_not_rejected() {
    let dir = common::data_dir();
    write_unit(
        dir.path(),
        "gina",
        "name,date,hours,subject\nGina,2025-01-06,1.25,Hiring\n",
    );

    let run = ReportLogic::run(dir.path()).expect("report");

    assert!(run.rejected.is_empty());
    assert!(approx(run.report.hours_by_subject["Hiring"], 1.25));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    write_unit(
        dir.path(),
        "hugo",
        "name,date,hours,subject\n\
         Hugo,2025-02-11,0.1,Meetings\n\
         Hugo,2025-02-12,0.2,Meetings\n\
         Hugo,2025-03-30,7.3,Training Models\n",
    );

    let first = ReportLogic::run(dir.path()).expect("first").report;
    let second = ReportLogic::run(dir.path()).expect("second").report;

    assert_eq!(first, second);
    assert_eq!(first.total_hours.to_bits(), second.total_hours.to_bits());
    assert_consistent(&first);
}

#[test]
fn test_person_shares() {
    let dir = common::data_dir();
    write_sample_team(dir.path());
    write_unit(
        dir.path(),
        "ivy",
        "name,date,hours,subject\nIvy,2025-01-07,10,Data Annotation\n",
    );

    let report = ReportLogic::run(dir.path()).expect("report").report;
    let shares = report.person_shares();

    assert_eq!(shares.len(), 3);
    assert_eq!(shares[0].0, "Alice");
    assert!(approx(shares[0].1, 25.0));
    assert_eq!(shares[2].0, "Ivy");
    assert!(approx(shares[2].1, 50.0));
}
