//! Integration tests for goal evaluation over in-memory students

use chrono::NaiveDate;
use study_dashboard::core::evaluation::{evaluate_all_goals, overall_status};
use study_dashboard::core::models::{
    Enrollment, Goal, GoalError, Module, Status, Student, StudyProgram,
};

const EPSILON: f64 = 1e-9;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn program() -> StudyProgram {
    StudyProgram::new(
        "BSC-CS".to_string(),
        "B.Sc. Computer Science".to_string(),
        180,
        36,
    )
}

fn module(id: &str, ects: u32) -> Module {
    Module::new(id.to_string(), format!("Module {id}"), ects)
}

fn student_with_grades(grades: &[f64]) -> Student {
    let mut student = Student::new("s1".to_string(), "Kim".to_string(), date(2024, 1, 1));
    for (i, grade) in grades.iter().enumerate() {
        student.add_enrollment(Enrollment::new(
            module(&format!("M{i}"), 5),
            Some(*grade),
            None,
        ));
    }
    student
}

/// Student starting 2024-01-01 with two passed 5-ECTS modules
fn scenario_student() -> Student {
    let mut student = Student::new("s1".to_string(), "Kim".to_string(), date(2024, 1, 1));
    student.add_enrollment(Enrollment::new(
        module("M1", 5),
        Some(2.0),
        Some(date(2024, 3, 1)),
    ));
    student.add_enrollment(Enrollment::new(
        module("M2", 5),
        Some(1.7),
        Some(date(2024, 5, 15)),
    ));
    student
}

#[test]
fn grade_goal_boundaries() {
    let goal = Goal::grade_average(2.5).unwrap();
    let as_of = date(2024, 7, 1);

    let status_for =
        |grade: f64| goal.evaluate(&student_with_grades(&[grade]), &program(), as_of).status;

    assert_eq!(status_for(2.5), Status::Green);
    assert_eq!(status_for(2.7), Status::Yellow);
    assert_eq!(status_for(2.81), Status::Red);
}

#[test]
fn grade_goal_without_grades_is_green() {
    let goal = Goal::grade_average(2.5).unwrap();
    let evaluation = goal.evaluate(&student_with_grades(&[]), &program(), date(2024, 7, 1));

    assert_eq!(evaluation.status, Status::Green);
    assert!(evaluation.criteria[0].value.abs() < EPSILON);
}

#[test]
fn end_to_end_scenario_is_red() {
    let mut student = scenario_student();
    student.add_goal(Goal::deadline(36).unwrap());

    let as_of = date(2024, 7, 1);
    assert_eq!(student.months_since_start(as_of), 6);
    assert_eq!(student.earned_credits(), 10);

    let evaluations = evaluate_all_goals(&student, &program(), as_of);
    assert_eq!(evaluations.len(), 1);

    let evaluation = &evaluations[0];
    assert_eq!(evaluation.status, Status::Red);
    assert_eq!(evaluation.criteria.len(), 2);

    let progress = &evaluation.criteria[0];
    assert!((progress.value - 10.0 / 180.0 * 100.0).abs() < EPSILON);
    assert!((progress.target - 6.0 / 36.0 * 100.0).abs() < EPSILON);

    let delta = &evaluation.criteria[1];
    assert!((delta.value - (progress.value - progress.target)).abs() < EPSILON);
    assert!(delta.value < -10.0);
    assert!(delta.target.abs() < EPSILON);
}

#[test]
fn pace_goal_boundaries() {
    // 48 ECTS over 6 months is exactly 8 per month
    let mut student = Student::new("s1".to_string(), "Kim".to_string(), date(2024, 1, 1));
    for i in 0..4 {
        student.add_enrollment(Enrollment::new(
            module(&format!("M{i}"), 12),
            None,
            Some(date(2024, 6, 1)),
        ));
    }
    let as_of = date(2024, 7, 1);
    let status_for = |target: f64| {
        Goal::cp_pace(target)
            .unwrap()
            .evaluate(&student, &program(), as_of)
            .status
    };

    assert_eq!(status_for(8.0), Status::Green);
    assert_eq!(status_for(10.0), Status::Yellow);
    assert_eq!(status_for(10.1), Status::Red);
}

#[test]
fn pace_uses_at_least_one_month() {
    let student = scenario_student();
    let same_month = date(2024, 1, 20);

    assert_eq!(student.months_since_start(same_month), 0);
    assert!((student.credits_per_month(same_month) - 10.0).abs() < EPSILON);
}

#[test]
fn months_ignore_day_of_month() {
    let student = Student::new("s1".to_string(), "Kim".to_string(), date(2024, 1, 31));

    assert_eq!(student.months_since_start(date(2024, 2, 1)), 1);
    assert_eq!(student.months_since_start(date(2025, 1, 1)), 12);
    assert_eq!(student.months_since_start(date(2023, 12, 1)), 0);
}

#[test]
fn percentages_are_clamped() {
    let mut student = Student::new("s1".to_string(), "Kim".to_string(), date(2020, 1, 1));
    student.add_enrollment(Enrollment::new(
        module("BIG", 400),
        None,
        Some(date(2021, 1, 1)),
    ));
    let as_of = date(2026, 1, 1);

    assert!((student.time_progress_percent(36, as_of) - 100.0).abs() < EPSILON);
    assert!((student.credit_progress_percent(180) - 100.0).abs() < EPSILON);
    assert!(student.time_progress_percent(0, as_of).abs() < EPSILON);
    assert!(student.credit_progress_percent(-1).abs() < EPSILON);
}

#[test]
fn evaluation_is_idempotent() {
    let mut student = scenario_student();
    student.add_goal(Goal::grade_average(2.0).unwrap());
    student.add_goal(Goal::deadline(36).unwrap());
    student.add_goal(Goal::cp_pace(1.0).unwrap());
    let as_of = date(2024, 7, 1);

    let first = evaluate_all_goals(&student, &program(), as_of);
    let second = evaluate_all_goals(&student, &program(), as_of);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(overall_status(&first), Some(Status::Red));
}

#[test]
fn duplicate_goal_kinds_are_evaluated_separately() {
    let mut student = scenario_student();
    student.add_goal(Goal::grade_average(1.0).unwrap());
    student.add_goal(Goal::grade_average(3.0).unwrap());

    let evaluations = evaluate_all_goals(&student, &program(), date(2024, 7, 1));

    let statuses: Vec<Status> = evaluations.iter().map(|e| e.status).collect();
    assert_eq!(statuses, vec![Status::Red, Status::Green]);
}

#[test]
fn no_goals_give_no_evaluations() {
    let student = scenario_student();
    let evaluations = evaluate_all_goals(&student, &program(), date(2024, 7, 1));

    assert!(evaluations.is_empty());
    assert_eq!(overall_status(&evaluations), None);
}

#[test]
fn goal_constructors_validate() {
    assert_eq!(Goal::deadline(0), Err(GoalError::NonPositiveDuration(0)));
    assert!(Goal::deadline(-3).is_err());
    assert!(Goal::grade_average(0.0).is_err());
    assert!(Goal::grade_average(f64::NAN).is_err());
    assert!(Goal::cp_pace(-0.5).is_err());
    assert!(Goal::cp_pace(0.0).is_ok());
}
