//! Report command handler
//!
//! Renders a student's goal evaluations and progress as a Markdown or HTML file.

use super::{date_or_today, fail, CliDashboard};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use study_dashboard::config::Config;
use study_dashboard::core::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use study_dashboard::{error, info};

/// Run the report command.
///
/// # Arguments
/// * `student` - Student id
/// * `format_str` - Report format (markdown, html)
/// * `output_file` - Optional output path
/// * `as_of` - Optional evaluation date, defaults to today
/// * `config` - Configuration containing the default reports directory
pub fn run(
    dashboard: &CliDashboard,
    student: &str,
    format_str: &str,
    output_file: Option<&Path>,
    as_of: Option<&str>,
    config: &Config,
) {
    match generate_report(dashboard, student, format_str, output_file, as_of, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed for {student}: {err}");
            fail(&err);
        }
    }
}

/// Resolve the output path: explicit path, or `<reports_dir>/<student>_<as_of>.<ext>`
fn output_path(
    output_file: Option<&Path>,
    reports_dir: &str,
    student: &str,
    as_of: &str,
    format: ReportFormat,
) -> PathBuf {
    output_file.map_or_else(
        || {
            PathBuf::from(reports_dir).join(format!(
                "{student}_{as_of}.{}",
                format.extension()
            ))
        },
        Path::to_path_buf,
    )
}

fn generate_report(
    dashboard: &CliDashboard,
    student: &str,
    format_str: &str,
    output_file: Option<&Path>,
    as_of: Option<&str>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;
    let as_of = date_or_today(as_of)?;

    let overview = dashboard
        .overview(student, as_of)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Student '{student}' not found"))?;

    let ctx = ReportContext::new(
        &overview.student,
        dashboard.program(),
        &overview.evaluations,
        &overview.snapshot,
    );

    let path = output_path(
        output_file,
        &config.paths.reports_dir,
        &overview.student.student_id,
        &as_of.format("%Y-%m-%d").to_string(),
        format,
    );

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &path),
    };
    result.map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    info!("Report for {student} written to {}", path.display());
    Ok(path)
}
