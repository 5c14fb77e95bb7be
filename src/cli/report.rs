//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Separate from core logic so
//! mapcheck can be used as a library without pulling in terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} Created {}",
                    SUCCESS_MARK.green(),
                    CONFIG_FILE_NAME
                );
            }
        }
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result, writer);
            } else {
                report_issues(&result.issues, verbose, writer);
                print_summary(result, writer);
            }
        }
    }
}

fn print_success<W: Write>(result: &CommandResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} script {} - no issues found",
            result.objects_checked,
            pluralize(result.objects_checked, "object", "objects"),
            result.script_files_checked,
            pluralize(result.script_files_checked, "file", "files")
        )
        .green()
    );
}

fn report_issues<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    // Align the rule column to the widest message
    let max_message_width = issues
        .iter()
        .map(|issue| UnicodeWidthStr::width(issue.message().as_str()))
        .max()
        .unwrap_or(0);

    for issue in issues {
        print_issue(issue, verbose, max_message_width, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, verbose: bool, max_message_width: usize, writer: &mut W) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let message = issue.message();
    let padding = max_message_width - UnicodeWidthStr::width(message.as_str());

    let _ = writeln!(
        writer,
        "{}: \"{}\"{:padding$}  {}",
        severity_str,
        message,
        "",
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Object(context) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), context.fourcc);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} note: {}", "=".blue(), details);
    }

    if verbose && let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} hint: {}", "=".blue(), hint.dimmed());
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(result: &CommandResult, writer: &mut W) {
    let counts = match (result.error_count, result.warning_count) {
        (0, warnings) => format!("{} {}", warnings, pluralize(warnings, "warning", "warnings")),
        (errors, 0) => format!("{} {}", errors, pluralize(errors, "error", "errors")),
        (errors, warnings) => format!(
            "{} {} and {} {}",
            errors,
            pluralize(errors, "error", "errors"),
            warnings,
            pluralize(warnings, "warning", "warnings")
        ),
    };

    let mark = if result.error_count > 0 {
        FAILURE_MARK.red()
    } else {
        FAILURE_MARK.yellow()
    };

    let _ = writeln!(
        writer,
        "{} found {} ({} {} checked)",
        mark,
        counts,
        result.objects_checked,
        pluralize(result.objects_checked, "object", "objects")
    );
}

fn pluralize(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
