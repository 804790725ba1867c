use std::io::IsTerminal;

use clap::{ArgAction, Args, Parser, ValueEnum};
use strum::Display;
use tracing_core::metadata::LevelFilter;

use crate::cli::commands::audit::AuditArgs;

#[deny(missing_docs)]
#[derive(Parser, Debug)]
#[command(name = "iam-auditor", version = env!("CARGO_PKG_VERSION"))]
/// iam-auditor - Report console login staleness and active access keys for every IAM user
pub struct CommandLineArgs {
    /// Credential selection for the audit
    #[command(flatten)]
    pub audit_args: AuditArgs,

    /// Global arguments
    #[command(flatten)]
    pub global_args: GlobalArgs,
}

impl CommandLineArgs {
    /// Parse command-line arguments.
    ///
    /// Automatically respects `NO_COLOR`.
    pub fn parse_args() -> Self {
        let mut args = CommandLineArgs::parse();

        if std::env::var_os("NO_COLOR").is_some() {
            args.global_args.color = Mode::Never;
        }

        args
    }
}

/// Top-level global CLI arguments
#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Global Options")]
pub struct GlobalArgs {
    /// Enable verbose output (up to 3 times for more detail)
    #[arg(global = true, long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything on stderr except errors
    #[arg(global = true, long, short)]
    pub quiet: bool,

    /// Colorize the report
    #[arg(global = true, long, value_name = "MODE", default_value_t = Mode::Auto)]
    pub color: Mode,
}

impl GlobalArgs {
    pub fn use_color<T: IsTerminal>(&self, out: T) -> bool {
        match self.color {
            Mode::Never => false,
            Mode::Always => true,
            Mode::Auto => out.is_terminal(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else {
            match self.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        }
    }

    /// `-vvv` opens logging for every target, including the AWS SDK.
    pub fn log_all_targets(&self) -> bool {
        !self.quiet && self.verbose > 2
    }
}

/// Generic mode with `auto/never/always`.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    #[default]
    Auto,
    Never,
    Always,
}
