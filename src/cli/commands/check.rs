use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    config::load_config,
    core::{IsoRegistry, load_identifier, run_audit},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let cwd = env::current_dir().context("Failed to read current directory")?;

    let loaded = load_config(&cwd, args.config.as_deref())?;
    let run_config = loaded.config.resolve(args.overrides())?;
    debug!("Resolved run config: {:?}", run_config);

    // The model must be ready before any string is touched.
    let identifier = load_identifier(run_config.detector, &run_config.model_path)?;

    let audit = run_audit(&run_config, identifier.as_ref(), &IsoRegistry)?;
    let flagged_count = audit.rows.len();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            audit,
            expected_language: run_config.expected_language,
        }),
        flagged_count,
        exit_on_flagged: args.strict,
        failed: false,
    })
}
