// tests/process_runner.rs

//! The real process runner, exercised against the host shell.

#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::path::PathBuf;

use tempfile::tempdir;

use zbuild::errors::ZbuildError;
use zbuild::exec::{CommandRunner, CommandSpec, ProcessRunner};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn captures_both_streams_and_the_exit_code() -> TestResult {
    init_tracing();

    let runner = ProcessRunner;
    let out = runner
        .run(
            CommandSpec::new("sh")
                .arg("-c")
                .arg("echo hello; echo oops >&2")
                .captured(),
        )
        .await?;

    assert!(out.success());
    assert_eq!(out.stdout.trim(), "hello");
    assert_eq!(out.stderr.trim(), "oops");

    Ok(())
}

#[tokio::test]
async fn a_non_zero_exit_is_reported_not_raised() -> TestResult {
    init_tracing();

    let runner = ProcessRunner;
    let out = runner
        .run(CommandSpec::new("sh").arg("-c").arg("exit 3").captured())
        .await?;

    assert!(!out.success());
    assert_eq!(out.exit_code, 3);

    Ok(())
}

#[tokio::test]
async fn a_missing_executable_is_a_fatal_spawn_error() {
    init_tracing();

    let runner = ProcessRunner;
    let err = runner
        .run(CommandSpec::new("zbuild-no-such-tool-on-any-path").arg("--version"))
        .await
        .expect_err("spawning a missing executable must fail");

    match err {
        ZbuildError::SpawnError { command, .. } => {
            assert!(command.contains("zbuild-no-such-tool-on-any-path"));
        }
        other => panic!("expected SpawnError, got: {other}"),
    }
}

#[tokio::test]
async fn runs_in_the_requested_working_directory() -> TestResult {
    init_tracing();
    let dir = tempdir()?;

    let runner = ProcessRunner;
    let out = runner
        .run(
            CommandSpec::new("sh")
                .arg("-c")
                .arg("pwd")
                .current_dir(dir.path())
                .captured(),
        )
        .await?;

    assert_eq!(
        PathBuf::from(out.stdout.trim()).canonicalize()?,
        dir.path().canonicalize()?
    );

    Ok(())
}
