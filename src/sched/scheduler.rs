// src/sched/scheduler.rs

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, error};

use crate::errors::{Result, ZbuildError};
use crate::exec::runner::CommandRunner;
use crate::exec::zig;
use crate::source::SourceFile;

/// One unit of compilation work: a source file plus its resolved object
/// path under the build root.
#[derive(Debug, Clone)]
pub struct CompileTask {
    pub source: SourceFile,
    pub output: PathBuf,
}

impl CompileTask {
    /// Invoke the compiler for this task and return the emitted artifact.
    pub async fn run(
        self,
        runner: &dyn CommandRunner,
        options: &[String],
    ) -> Result<PathBuf> {
        zig::compile_source(
            runner,
            &self.source.path,
            &self.output,
            options,
            self.source.family,
        )
        .await
    }
}

/// Run all compile tasks with at most `jobs` compiler processes in flight.
///
/// Semantics:
/// - Every task is spawned immediately; the semaphore permit is acquired
///   before the compiler is invoked and released on every exit path, so a
///   failing task never leaks a permit.
/// - No ordering between tasks beyond the concurrency cap; completion order
///   is unrelated to task order.
/// - Fail-together: siblings of a failing task are not cancelled, and the
///   join waits for all of them. Every failure is logged; the failure
///   *returned* is the first one in task-list order, so multiple failures
///   never surface non-deterministically.
/// - No retries and no timeouts: one failing invocation is terminal for the
///   build, and a hung compiler hangs the build.
///
/// On success the artifacts come back in task-list order.
pub async fn run_all(
    tasks: Vec<CompileTask>,
    runner: Arc<dyn CommandRunner>,
    options: Arc<Vec<String>>,
    jobs: usize,
) -> Result<Vec<PathBuf>> {
    debug!(tasks = tasks.len(), jobs, "scheduling compile tasks");

    let gate = Arc::new(Semaphore::new(jobs));
    let mut handles = Vec::with_capacity(tasks.len());

    for task in tasks {
        let gate = Arc::clone(&gate);
        let runner = Arc::clone(&runner);
        let options = Arc::clone(&options);

        handles.push(tokio::spawn(async move {
            let _permit = gate
                .acquire_owned()
                .await
                .map_err(|err| ZbuildError::Other(anyhow::Error::new(err)))?;

            // The permit is dropped when this future completes, on success
            // and on failure alike.
            task.run(runner.as_ref(), &options).await
        }));
    }

    let mut artifacts = Vec::with_capacity(handles.len());
    let mut first_failure: Option<ZbuildError> = None;
    let mut failed = 0usize;

    for handle in handles {
        let result = match handle.await {
            Ok(result) => result,
            // A panicked task still counts as a failed compile; keep
            // draining the remaining handles so the join stays complete.
            Err(join_err) => Err(ZbuildError::Other(anyhow::Error::new(join_err))),
        };

        match result {
            Ok(artifact) => artifacts.push(artifact),
            Err(err) => {
                failed += 1;
                error!(error = %err, "compile task failed");
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    if let Some(err) = first_failure {
        error!(failed, "compilation failed; skipping link");
        return Err(err);
    }

    Ok(artifacts)
}
