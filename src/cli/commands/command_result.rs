use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a mapcheck command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Whether error-level issues should produce a failing exit code.
    pub exit_on_errors: bool,
    pub issues: Vec<Issue>,
    pub objects_checked: usize,
    pub script_files_checked: usize,
}
