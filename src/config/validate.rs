// src/config/validate.rs

use crate::config::model::BuildConfig;
use crate::errors::{Result, ZbuildError};

/// Run basic semantic validation against a resolved configuration.
///
/// This checks:
/// - the source directory exists and is a directory
/// - the build directory is not the source directory, or an ancestor of it
///   (the build directory is deleted and recreated on every run)
/// - `jobs`, when given, is at least 1
/// - the output name is not empty
pub fn validate_config(cfg: &BuildConfig) -> Result<()> {
    ensure_source_dir(cfg)?;
    ensure_build_dir_is_safe(cfg)?;
    ensure_sane_values(cfg)?;
    Ok(())
}

fn ensure_source_dir(cfg: &BuildConfig) -> Result<()> {
    if !cfg.source_dir.is_dir() {
        return Err(ZbuildError::ConfigError(format!(
            "source directory `{}` does not exist",
            cfg.source_dir.display()
        )));
    }
    Ok(())
}

fn ensure_build_dir_is_safe(cfg: &BuildConfig) -> Result<()> {
    // The build directory is destroyed at the start of every run, so it
    // must never contain the sources.
    if cfg.build_dir == cfg.source_dir || cfg.source_dir.starts_with(&cfg.build_dir) {
        return Err(ZbuildError::ConfigError(format!(
            "build directory `{}` would be recreated over the source directory `{}`",
            cfg.build_dir.display(),
            cfg.source_dir.display()
        )));
    }
    Ok(())
}

fn ensure_sane_values(cfg: &BuildConfig) -> Result<()> {
    if let Some(0) = cfg.jobs {
        return Err(ZbuildError::ConfigError(
            "--jobs must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.output.trim().is_empty() {
        return Err(ZbuildError::ConfigError(
            "output name must not be empty".to_string(),
        ));
    }

    if cfg.target.trim().is_empty() {
        return Err(ZbuildError::ConfigError(
            "target must not be empty (use `native` for the host)".to_string(),
        ));
    }

    Ok(())
}
