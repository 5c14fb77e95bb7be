use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Report, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    objects_checked: usize,
    script_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    // Rules emit sorted output already; this makes the cross-rule order
    // stable as well.
    issues.sort_by(|a, b| {
        a.rule()
            .cmp(&b.rule())
            .then_with(|| a.message().cmp(&b.message()))
    });

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        objects_checked,
        script_files_checked,
    }
}
