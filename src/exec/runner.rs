// src/exec/runner.rs

//! Process launching primitive shared by compiling, linking and library
//! probing.
//!
//! Production code uses [`ProcessRunner`]; tests provide their own
//! [`CommandRunner`] that records invocations and answers with scripted
//! outputs instead of spawning real processes.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{Result, ZbuildError};

/// One external command invocation.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,

    /// Working directory; inherits the parent's when `None`.
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr instead of inheriting the parent's streams.
    pub capture_output: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            capture_output: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn captured(mut self) -> Self {
        self.capture_output = true;
        self
    }

    /// The command line as it would be typed in a shell, for diagnostics.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Exit status plus captured output of a finished command.
///
/// `stdout`/`stderr` are empty when the command ran with inherited streams.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how external commands are run.
///
/// Implementations are shared across concurrent compile tasks behind an
/// `Arc`, so `run` takes `&self` and the trait requires `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    /// Launch the command and wait for it to exit.
    ///
    /// A non-zero exit is *not* an error at this layer; callers decide what
    /// a failing exit code means. Failing to launch the process at all
    /// (missing executable) is [`ZbuildError::SpawnError`] and is fatal.
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>>;
}

/// Real command runner used in production.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(async move {
            debug!(cmd = %spec.command_line(), "running command");

            let mut cmd = Command::new(&spec.program);
            cmd.args(&spec.args);
            cmd.kill_on_drop(true);

            if let Some(dir) = &spec.cwd {
                cmd.current_dir(dir);
            }

            if spec.capture_output {
                cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

                let output = cmd.output().await.map_err(|err| spawn_error(&spec, err))?;

                Ok(CommandOutput {
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            } else {
                let status = cmd.status().await.map_err(|err| spawn_error(&spec, err))?;

                Ok(CommandOutput {
                    exit_code: status.code().unwrap_or(-1),
                    ..CommandOutput::default()
                })
            }
        })
    }
}

fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> ZbuildError {
    ZbuildError::SpawnError {
        command: spec.command_line(),
        source,
    }
}
