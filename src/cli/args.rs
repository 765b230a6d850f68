//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Detect the language of every string and report the mismatches
//! - `init`: Create a `.lidcheckrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::core::DetectorKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Config file (default: nearest .lidcheckrc.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// String resource file to check (overrides config file)
    #[arg(short, long)]
    pub resource: Option<PathBuf>,

    /// CSV report path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Expected language name, e.g. "French" (overrides config file)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Language detector backend (overrides config file)
    #[arg(long, value_enum)]
    pub detector: Option<DetectorKind>,

    /// Path to the fastText model (overrides config file)
    #[arg(long, env = "LIDCHECK_MODEL")]
    pub model: Option<PathBuf>,

    /// Exit with status 1 when any string is flagged
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            resource_path: self.resource.clone(),
            output_path: self.output.clone(),
            language: self.language.clone(),
            detector: self.detector,
            model_path: self.model.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Flag strings whose detected language differs from the expected one
    Check(CheckCommand),
    /// Initialize a new .lidcheckrc.json configuration file
    Init,
}
