// src/libs/resolve.rs

//! Required-library resolution.

use tracing::info;

use crate::errors::{Result, ZbuildError};
use crate::exec::runner::CommandRunner;
use crate::libs::pkg_config;

/// Resolve every required package into compile/link flags.
///
/// Runs before any compilation is scheduled; a package `pkg-config` cannot
/// find aborts the build with a configuration error.
pub async fn required_package_flags(
    runner: &dyn CommandRunner,
    packages: &[String],
) -> Result<Vec<String>> {
    let mut flags = Vec::new();

    for package in packages {
        if !pkg_config::exists(runner, package).await? {
            return Err(ZbuildError::ConfigError(format!(
                "{package} not found via pkg-config. Please install the {package} development files."
            )));
        }

        let package_flags = pkg_config::cflags(runner, package).await?;
        info!(package = %package, flags = package_flags.len(), "resolved library");
        flags.extend(package_flags);
    }

    Ok(flags)
}
