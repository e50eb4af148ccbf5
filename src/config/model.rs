// src/config/model.rs

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Build mode as selected on the CLI or in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Release,
}

impl Default for BuildMode {
    fn default() -> Self {
        BuildMode::Debug
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => write!(f, "debug"),
            BuildMode::Release => write!(f, "release"),
        }
    }
}

/// Top-level manifest as read from `zbuild.toml`.
///
/// All sections are optional:
///
/// ```toml
/// [build]
/// source_dir = "src"
/// build_dir = "build"
/// target = "native"
/// mode = "debug"
/// output = "app"
///
/// [libs]
/// pkg_config = ["sdl2"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// `[build]` section: defaults for the CLI flags of the same names.
    #[serde(default)]
    pub build: BuildSection,

    /// `[libs]` section: required third-party libraries.
    #[serde(default)]
    pub libs: LibsSection,
}

/// `[build]` section of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSection {
    #[serde(default)]
    pub build_dir: Option<String>,

    #[serde(default)]
    pub source_dir: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub mode: Option<BuildMode>,

    #[serde(default)]
    pub output: Option<String>,

    /// Maximum concurrent compiler processes; `None` means CPU count.
    #[serde(default)]
    pub jobs: Option<usize>,
}

/// `[libs]` section of the manifest.
///
/// Each listed package must be resolvable via `pkg-config`; a missing
/// package aborts the build before any compilation starts.
#[derive(Debug, Clone, Deserialize)]
pub struct LibsSection {
    #[serde(default = "default_pkg_config_packages")]
    pub pkg_config: Vec<String>,
}

fn default_pkg_config_packages() -> Vec<String> {
    vec!["sdl2".to_string()]
}

impl Default for LibsSection {
    fn default() -> Self {
        Self {
            pkg_config: default_pkg_config_packages(),
        }
    }
}

/// Fully resolved, immutable configuration for one build invocation.
///
/// This is the only configuration type the orchestrator, scheduler and
/// tasks ever see.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory for build output; recreated empty at the start of a build.
    pub build_dir: PathBuf,

    /// Directory scanned for source files.
    pub source_dir: PathBuf,

    /// Target triple, or `"native"` for the host.
    pub target: String,

    pub mode: BuildMode,

    /// Base name of the output binary, relative to `build_dir`.
    pub output: String,

    /// Concurrency cap for compile tasks; `None` means logical CPU count.
    pub jobs: Option<usize>,

    /// pkg-config packages that must be present.
    pub pkg_config_packages: Vec<String>,
}

impl BuildConfig {
    /// Merge CLI flags over manifest values over built-in defaults.
    pub fn resolve(args: &CliArgs, manifest: &Manifest) -> Self {
        let build = &manifest.build;

        let build_dir = args
            .build_dir
            .clone()
            .or_else(|| build.build_dir.clone())
            .unwrap_or_else(|| "build".to_string());

        let source_dir = args
            .source_dir
            .clone()
            .or_else(|| build.source_dir.clone())
            .unwrap_or_else(|| "src".to_string());

        let target = args
            .target
            .clone()
            .or_else(|| build.target.clone())
            .unwrap_or_else(|| "native".to_string());

        let mode = args.mode.or(build.mode).unwrap_or_default();

        let output = args
            .output
            .clone()
            .or_else(|| build.output.clone())
            .unwrap_or_else(|| "app".to_string());

        let jobs = args.jobs.or(build.jobs);

        Self {
            build_dir: PathBuf::from(build_dir),
            source_dir: PathBuf::from(source_dir),
            target,
            mode,
            output,
            jobs,
            pkg_config_packages: manifest.libs.pkg_config.clone(),
        }
    }
}
