//! Integration tests for the dashboard service and report rendering

use chrono::NaiveDate;
use study_dashboard::core::dashboard::{Dashboard, DashboardError, GoalTargets};
use study_dashboard::core::input::{parse_date, parse_grade};
use study_dashboard::core::models::{Goal, Status, StudyProgram};
use study_dashboard::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator, NO_DATA_LABEL,
};
use study_dashboard::core::storage::SqliteStore;
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dashboard() -> Dashboard<SqliteStore> {
    let store = SqliteStore::open_in_memory().expect("Failed to open store");
    let program = StudyProgram::new(
        "BSC-CS".to_string(),
        "B.Sc. Computer Science".to_string(),
        180,
        36,
    );
    Dashboard::new(store, program)
}

/// Student s1 from 2024-01-01 with two passed 5-ECTS modules, entered as typed text
fn seeded_dashboard() -> Dashboard<SqliteStore> {
    let mut dash = dashboard();
    dash.save_student(" s1 ", "Kim Lee", date(2024, 1, 1)).unwrap();
    dash.save_module("M1", "Algorithms", 5).unwrap();
    dash.save_module("M2", "Databases", 5).unwrap();
    dash.record_enrollment(
        "s1",
        "M1",
        parse_grade("2,0").unwrap(),
        parse_date("01.03.2024").unwrap(),
    )
    .unwrap();
    dash.record_enrollment(
        "s1",
        "M2",
        parse_grade("1.7").unwrap(),
        parse_date("2024-05-15").unwrap(),
    )
    .unwrap();
    dash
}

#[test]
fn save_student_requires_id_and_name() {
    let mut dash = dashboard();

    let err = dash.save_student("  ", "Kim", date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, DashboardError::Input(_)));

    let err = dash.save_student("s1", "", date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, DashboardError::Input(_)));
    assert!(dash.students().unwrap().is_empty());
}

#[test]
fn student_ids_are_trimmed() {
    let dash = seeded_dashboard();
    let students = dash.students().unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student_id, "s1");
    assert!(dash.module("M1").unwrap().is_some());
}

#[test]
fn padded_student_ids_reach_the_stored_student() {
    let mut dash = seeded_dashboard();
    let targets = GoalTargets {
        duration_months: Some(36),
        ..GoalTargets::default()
    };

    let goals = dash.update_goals(" s1 ", targets).unwrap();
    assert_eq!(dash.student(" s1").unwrap().unwrap().goals, goals);

    let overview = dash.overview("s1 ", date(2024, 7, 1)).unwrap().unwrap();
    assert_eq!(overview.student.student_id, "s1");
    assert_eq!(overview.evaluations.len(), 1);

    dash.clear_goals("\ts1\n").unwrap();
    assert!(dash.student("s1").unwrap().unwrap().goals.is_empty());
}

#[test]
fn update_goals_orders_and_stores_targets() {
    let mut dash = seeded_dashboard();
    let targets = GoalTargets {
        target_avg: Some(2.0),
        duration_months: Some(36),
        target_cp_per_month: Some(1.0),
    };

    let goals = dash.update_goals("s1", targets).unwrap();

    let kinds: Vec<&str> = goals.iter().map(|g| g.kind().as_str()).collect();
    assert_eq!(kinds, vec!["grade_average", "deadline", "cp_pace"]);
    assert_eq!(dash.student("s1").unwrap().unwrap().goals, goals);
}

#[test]
fn invalid_targets_leave_goals_untouched() {
    let mut dash = seeded_dashboard();
    dash.update_goals(
        "s1",
        GoalTargets {
            duration_months: Some(36),
            ..GoalTargets::default()
        },
    )
    .unwrap();

    let err = dash
        .update_goals(
            "s1",
            GoalTargets {
                duration_months: Some(0),
                ..GoalTargets::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, DashboardError::Goal(_)));
    assert_eq!(
        dash.student("s1").unwrap().unwrap().goals,
        vec![Goal::deadline(36).unwrap()]
    );
}

#[test]
fn goals_for_unknown_student_are_rejected() {
    let mut dash = seeded_dashboard();

    let err = dash.update_goals("ghost", GoalTargets::default()).unwrap_err();
    assert!(matches!(err, DashboardError::StudentNotFound(ref id) if id == "ghost"));
    assert!(dash.clear_goals("ghost").is_err());
}

#[test]
fn enrollment_for_unknown_module_is_an_integrity_error() {
    let mut dash = seeded_dashboard();

    let err = dash.record_enrollment("s1", "M9", None, None).unwrap_err();
    match err {
        DashboardError::Storage(storage) => assert!(storage.is_integrity()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn overview_reports_red_deadline() {
    let mut dash = seeded_dashboard();
    dash.update_goals(
        "s1",
        GoalTargets {
            duration_months: Some(36),
            ..GoalTargets::default()
        },
    )
    .unwrap();

    let overview = dash.overview("s1", date(2024, 7, 1)).unwrap().unwrap();

    assert_eq!(overview.evaluations.len(), 1);
    assert_eq!(overview.evaluations[0].status, Status::Red);
    assert_eq!(overview.snapshot.months_elapsed, 6);
    assert_eq!(overview.snapshot.earned_credits, 10);
    assert!((overview.snapshot.average_grade - 1.85).abs() < 1e-9);
}

#[test]
fn overview_of_missing_student_is_none() {
    let dash = seeded_dashboard();
    assert!(dash.overview("ghost", date(2024, 7, 1)).unwrap().is_none());
}

#[test]
fn cleared_goals_give_placeholder_report() {
    let mut dash = seeded_dashboard();
    dash.update_goals(
        "s1",
        GoalTargets {
            target_avg: Some(2.0),
            ..GoalTargets::default()
        },
    )
    .unwrap();
    dash.clear_goals("s1").unwrap();

    let overview = dash.overview("s1", date(2024, 7, 1)).unwrap().unwrap();
    assert!(overview.evaluations.is_empty());

    let ctx = ReportContext::new(
        &overview.student,
        dash.program(),
        &overview.evaluations,
        &overview.snapshot,
    );
    let markdown = MarkdownReporter::new().render(&ctx).unwrap();
    assert!(markdown.contains(NO_DATA_LABEL));
}

#[test]
fn reports_render_statuses_and_values() {
    let mut dash = seeded_dashboard();
    dash.update_goals(
        "s1",
        GoalTargets {
            target_avg: Some(2.0),
            duration_months: Some(36),
            target_cp_per_month: None,
        },
    )
    .unwrap();
    let overview = dash.overview("s1", date(2024, 7, 1)).unwrap().unwrap();
    let ctx = ReportContext::new(
        &overview.student,
        dash.program(),
        &overview.evaluations,
        &overview.snapshot,
    );

    let markdown = MarkdownReporter::new().render(&ctx).unwrap();
    assert!(markdown.contains("Kim Lee"));
    assert!(markdown.contains("| GREEN | Grade average | Average grade | 1.85 | 2.00 |"));
    assert!(markdown.contains("| RED | Deadline / plan | Credit progress % | 5.56 | 16.67 |"));
    assert!(markdown.contains("| M1 – Algorithms (5 ECTS) | 2.00 | 2024-03-01 |"));
    assert!(markdown.contains("| M2 – Databases (5 ECTS) | 1.70 | 2024-05-15 |"));

    let html = HtmlReporter::new().render(&ctx).unwrap();
    assert!(html.contains("status-red"));
    assert!(html.contains("status-green"));
    assert!(html.contains("B.Sc. Computer Science"));
}

#[test]
fn generate_writes_report_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("reports").join("s1.html");

    let dash = seeded_dashboard();
    let overview = dash.overview("s1", date(2024, 7, 1)).unwrap().unwrap();
    let ctx = ReportContext::new(
        &overview.student,
        dash.program(),
        &overview.evaluations,
        &overview.snapshot,
    );

    HtmlReporter::new().generate(&ctx, &output).unwrap();

    let content = fs::read_to_string(&output).expect("Report file missing");
    assert!(content.starts_with("<!DOCTYPE html>"));
}
