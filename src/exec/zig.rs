// src/exec/zig.rs

//! Zig toolchain invocations.
//!
//! The same toolchain covers all three source families:
//!
//! - `zig build-obj` compiles the Zig entry point (emit path via
//!   `-femit-bin=`; the compiler appends the object extension itself)
//! - `zig cc` / `zig c++` compile C / C++ sources (`-o <path>`)
//! - `zig build-exe` links the object set into one executable
//!
//! On a non-zero exit, captured stdout/stderr are surfaced verbatim together
//! with the exact command line before the typed error is returned.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::errors::{Result, ZbuildError};
use crate::exec::runner::{CommandOutput, CommandRunner, CommandSpec};
use crate::source::SourceFamily;

/// Ask the toolchain for its version.
///
/// Doubles as the preflight check that `zig` is on `PATH`: a missing
/// executable surfaces as a fatal spawn error before any work starts.
pub async fn zig_version(runner: &dyn CommandRunner) -> Result<String> {
    let spec = CommandSpec::new("zig").arg("version").captured();
    let out = runner.run(spec).await?;

    if !out.success() {
        return Err(ZbuildError::ConfigError(format!(
            "`zig version` exited with code {}",
            out.exit_code
        )));
    }

    Ok(out.stdout.trim().to_string())
}

/// Compile one source file into one object artifact.
///
/// `output` is the translated path under the build root: `.o` for C/C++, no
/// extension for Zig. The returned path is the artifact as emitted on disk,
/// which for the Zig family carries the `.o` suffix the compiler appends.
pub async fn compile_source(
    runner: &dyn CommandRunner,
    source: &Path,
    output: &Path,
    options: &[String],
    family: SourceFamily,
) -> Result<PathBuf> {
    ensure_parent_dir(output).await?;

    let (spec, artifact) = match family {
        SourceFamily::Zig => {
            let artifact = PathBuf::from(format!("{}.o", output.display()));
            let spec = CommandSpec::new("zig")
                .arg("build-obj")
                .args(options.iter().cloned())
                .arg(source.display().to_string())
                .arg(format!("-femit-bin={}", output.display()))
                .captured();
            (spec, artifact)
        }
        SourceFamily::C | SourceFamily::Cpp => {
            let compiler = if family == SourceFamily::C { "cc" } else { "c++" };
            let spec = CommandSpec::new("zig")
                .arg(compiler)
                .args(options.iter().cloned())
                .arg(source.display().to_string())
                .arg("-o")
                .arg(output.display().to_string())
                .captured();
            (spec, output.to_path_buf())
        }
    };

    info!(
        source = %source.display(),
        artifact = %artifact.display(),
        "compiling"
    );

    let command_line = spec.command_line();
    let out = runner.run(spec).await?;

    if !out.success() {
        report_tool_failure(&command_line, &out);
        return Err(ZbuildError::CompileError {
            source_path: source.to_path_buf(),
            diagnostic: diagnostic_text(&out),
        });
    }

    Ok(artifact)
}

/// Link the object set into a single executable at `output`.
pub async fn link_executable(
    runner: &dyn CommandRunner,
    objects: &[PathBuf],
    output: &Path,
    options: &[String],
) -> Result<PathBuf> {
    info!(
        objects = objects.len(),
        output = %output.display(),
        "linking"
    );

    let spec = CommandSpec::new("zig")
        .arg("build-exe")
        .arg(format!("-femit-bin={}", output.display()))
        .args(objects.iter().map(|obj| obj.display().to_string()))
        .args(options.iter().cloned())
        .captured();

    let command_line = spec.command_line();
    let out = runner.run(spec).await?;

    if !out.success() {
        report_tool_failure(&command_line, &out);
        return Err(ZbuildError::LinkError {
            diagnostic: diagnostic_text(&out),
        });
    }

    Ok(output.to_path_buf())
}

/// Parent directories are created per artifact; concurrent tasks may race on
/// a shared subdirectory, which `create_dir_all` tolerates.
async fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// Surface a failing tool invocation verbatim: both captured streams plus
/// the exact command line that was attempted.
fn report_tool_failure(command_line: &str, out: &CommandOutput) {
    if !out.stdout.is_empty() {
        error!("{}", out.stdout);
    }
    if !out.stderr.is_empty() {
        error!("{}", out.stderr);
    }
    error!(exit_code = out.exit_code, cmd = %command_line, "command failed");
}

fn diagnostic_text(out: &CommandOutput) -> String {
    let mut text = String::new();
    if !out.stderr.trim().is_empty() {
        text.push_str(out.stderr.trim());
    }
    if !out.stdout.trim().is_empty() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(out.stdout.trim());
    }
    if text.is_empty() {
        text = format!("exit code {}", out.exit_code);
    }
    text
}
