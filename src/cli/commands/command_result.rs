use crate::core::AuditSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub audit: AuditSummary,
    pub expected_language: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// `false` when a config file already existed and was left untouched.
    pub created: bool,
}

/// Result of running lidcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of strings flagged as not being in the expected language.
    pub flagged_count: usize,
    /// If true, exit status 1 is returned when `flagged_count > 0`.
    pub exit_on_flagged: bool,
    /// The command could not do its job (e.g. `init` found an existing file).
    pub failed: bool,
}
