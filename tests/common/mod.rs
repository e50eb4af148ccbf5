// tests/common/mod.rs

//! Shared test helpers: tracing setup and a scripted command runner.

// Not every helper is used by every test target.
#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use zbuild::errors::Result;
use zbuild::exec::{CommandOutput, CommandRunner, CommandSpec};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Uses `with_test_writer()`, so logs are captured per-test and only
/// printed for failing tests (unless you run with `-- --nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

type Rule = dyn Fn(&CommandSpec) -> CommandOutput + Send + Sync;
type DelayRule = dyn Fn(&CommandSpec) -> Duration + Send + Sync;

/// Scripted stand-in for the real process runner.
///
/// - records every command it is asked to run
/// - tracks how many commands are in flight at once (peak concurrency)
/// - answers each command from a caller-provided rule
pub struct FakeRunner {
    rule: Box<Rule>,
    delay: Option<Box<DelayRule>>,
    invocations: Mutex<Vec<CommandSpec>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeRunner {
    /// A runner that answers every command with exit code 0 and no output.
    pub fn succeeding() -> Self {
        Self::with_rule(|_| ok_output(""))
    }

    pub fn with_rule(
        rule: impl Fn(&CommandSpec) -> CommandOutput + Send + Sync + 'static,
    ) -> Self {
        Self {
            rule: Box::new(rule),
            delay: None,
            invocations: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Hold every command in flight for a fixed duration, so overlapping
    /// commands are observable.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.with_delay_rule(move |_| delay)
    }

    /// Per-command in-flight duration.
    pub fn with_delay_rule(
        mut self,
        delay: impl Fn(&CommandSpec) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(CommandSpec::command_line)
            .collect()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.command_lines()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl CommandRunner for FakeRunner {
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(async move {
            self.invocations.lock().unwrap().push(spec.clone());

            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

            if let Some(delay) = &self.delay {
                tokio::time::sleep(delay(&spec)).await;
            }

            let out = (self.rule)(&spec);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(out)
        })
    }
}

pub fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn failed_output(exit_code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Happy-path rule for whole-pipeline tests: a plausible toolchain that
/// always succeeds.
pub fn toolchain_rule() -> impl Fn(&CommandSpec) -> CommandOutput + Send + Sync + 'static {
    |spec: &CommandSpec| {
        if spec.program == "zig" && spec.args.first().is_some_and(|a| a == "version") {
            return ok_output("0.14.0\n");
        }
        if spec.program == "pkg-config" {
            if spec.args.iter().any(|a| a == "--exists") {
                return ok_output("");
            }
            return ok_output("-I/usr/include/SDL2 -lSDL2\n");
        }
        ok_output("")
    }
}
