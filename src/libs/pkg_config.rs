// src/libs/pkg_config.rs

//! Thin queries against the `pkg-config` registry.
//!
//! A missing `pkg-config` executable propagates as a spawn error; a package
//! the registry does not know is reported through the query results, not as
//! an error at this layer.

use crate::errors::Result;
use crate::exec::runner::{CommandRunner, CommandSpec};

pub async fn exists(runner: &dyn CommandRunner, package: &str) -> Result<bool> {
    let spec = CommandSpec::new("pkg-config").arg("--exists").arg(package);
    let out = runner.run(spec).await?;
    Ok(out.success())
}

/// Combined compile and link flags for a package.
pub async fn cflags(runner: &dyn CommandRunner, package: &str) -> Result<Vec<String>> {
    query(runner, &["--cflags", "--libs"], package).await
}

/// Link flags only.
pub async fn libs(runner: &dyn CommandRunner, package: &str) -> Result<Vec<String>> {
    query(runner, &["--libs"], package).await
}

async fn query(
    runner: &dyn CommandRunner,
    flags: &[&str],
    package: &str,
) -> Result<Vec<String>> {
    let spec = CommandSpec::new("pkg-config")
        .args(flags.iter().copied())
        .arg(package)
        .captured();

    let out = runner.run(spec).await?;
    if !out.success() {
        return Ok(Vec::new());
    }

    Ok(out
        .stdout
        .split_whitespace()
        .map(str::to_string)
        .collect())
}
