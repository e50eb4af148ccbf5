// src/platform/mod.rs

//! Platform selection, flag tables and artifact naming conventions.
//!
//! Platforms form a small closed set, so they are a tagged variant with one
//! flags table per case, selected once from the resolved target at
//! orchestration start.

use std::path::PathBuf;

use crate::config::BuildMode;
use crate::errors::{Result, ZbuildError};

/// Sentinel target meaning "build for the host".
pub const NATIVE_TARGET: &str = "native";

const DEBUG_OPT: &str = "Debug";
const RELEASE_OPT: &str = "ReleaseSafe";

/// OS family of the resolved build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// Pick the platform for a target string. Pure function of the target
    /// and the host OS: `native` resolves to the host, anything else is
    /// matched on the OS component of the triple.
    pub fn resolve(target: &str) -> Result<Platform> {
        if target == NATIVE_TARGET {
            return host_platform();
        }
        if target.contains("linux") {
            Ok(Platform::Linux)
        } else if target.contains("macos") {
            Ok(Platform::Macos)
        } else if target.contains("windows") {
            Ok(Platform::Windows)
        } else {
            Err(ZbuildError::ConfigError(format!(
                "unsupported target `{target}` (expected a linux, macos or windows triple, or `native`)"
            )))
        }
    }

    /// Compiler/linker flags for this platform and build mode.
    ///
    /// `-target` is only passed for cross targets; for `native` the
    /// toolchain default is already the host.
    pub fn flags(&self, mode: BuildMode, target: &str) -> Vec<String> {
        let opt = match mode {
            BuildMode::Debug => DEBUG_OPT,
            BuildMode::Release => RELEASE_OPT,
        };

        let mut flags = vec!["-O".to_string(), opt.to_string()];

        if target != NATIVE_TARGET {
            flags.push("-target".to_string());
            flags.push(target.to_string());
        }

        match self {
            Platform::Linux | Platform::Macos => {
                flags.push("-lc".to_string());
            }
            Platform::Windows => {
                for lib in ["-ladvapi32", "-lkernel32", "-lntdll", "-luser32", "-lshell32"] {
                    flags.push(lib.to_string());
                }
            }
        }

        flags
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Object naming convention for the link step. Windows toolchains emit
    /// `.obj`; everything else keeps `.o`.
    pub fn finalize_artifacts(&self, artifacts: Vec<PathBuf>) -> Vec<PathBuf> {
        if !self.is_windows() {
            return artifacts;
        }

        artifacts
            .into_iter()
            .map(|mut artifact| {
                if artifact.extension().is_some_and(|ext| ext == "o") {
                    artifact.set_extension("obj");
                }
                artifact
            })
            .collect()
    }

    /// Final executable name for this platform.
    pub fn executable_name(&self, base: &str) -> String {
        if self.is_windows() {
            format!("{base}.exe")
        } else {
            base.to_string()
        }
    }
}

fn host_platform() -> Result<Platform> {
    if cfg!(target_os = "linux") {
        Ok(Platform::Linux)
    } else if cfg!(target_os = "macos") {
        Ok(Platform::Macos)
    } else if cfg!(target_os = "windows") {
        Ok(Platform::Windows)
    } else {
        Err(ZbuildError::ConfigError(
            "unsupported host platform; pass an explicit --target".to_string(),
        ))
    }
}
