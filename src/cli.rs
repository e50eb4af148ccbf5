// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::BuildMode;

/// Command-line arguments for `zbuild`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zbuild",
    version,
    about = "Compile a Zig + C/C++ source tree and link it into one executable.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the manifest file (TOML).
    ///
    /// Default: `zbuild.toml` in the current working directory. A missing
    /// manifest is fine; built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Directory for build output. Recreated empty on every invocation.
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<String>,

    /// Directory scanned for source files.
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Target triple, e.g. `x86_64-windows-gnu`. `native` means the host.
    #[arg(long, value_name = "TRIPLE")]
    pub target: Option<String>,

    /// Build mode.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<BuildMode>,

    /// Base name of the output binary (platform suffix added automatically).
    #[arg(long, value_name = "NAME")]
    pub output: Option<String>,

    /// Maximum number of concurrent compiler processes.
    ///
    /// Defaults to the number of logical CPUs.
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ZBUILD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve config, print what would be built, but don't run any commands.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
