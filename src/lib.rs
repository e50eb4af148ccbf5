// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod libs;
pub mod logging;
pub mod platform;
pub mod sched;
pub mod source;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_manifest, validate_config, BuildConfig};
use crate::errors::{Result, ZbuildError};
use crate::exec::{CommandRunner, ProcessRunner};
use crate::platform::Platform;
use crate::sched::CompileTask;
use crate::source::{discover_sources, paths, SourceFamily};

/// High-level entry point used by `main.rs`.
///
/// Resolves configuration (CLI flags over the optional `zbuild.toml`
/// manifest), wires the production process runner, and runs one build.
pub async fn run(args: CliArgs) -> Result<()> {
    let manifest = load_manifest(args.config.as_deref())?;
    let config = BuildConfig::resolve(&args, &manifest);
    validate_config(&config)?;

    if args.dry_run {
        print_dry_run(&config)?;
        return Ok(());
    }

    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner);
    let executable = run_build(&config, runner).await?;
    info!(executable = %executable.display(), "build finished");
    Ok(())
}

/// Run one full clean build and return the linked executable path.
///
/// Strictly ordered: recreate the build directory empty, discover sources,
/// resolve the platform, assemble the build options, compile everything
/// under the bounded scheduler, apply Windows artifact naming, link. The
/// runner is injected so tests can drive the whole pipeline without
/// spawning real toolchain processes.
pub async fn run_build(
    config: &BuildConfig,
    runner: Arc<dyn CommandRunner>,
) -> Result<PathBuf> {
    let version = exec::zig::zig_version(runner.as_ref()).await?;
    info!(
        zig = %version,
        target = %config.target,
        mode = %config.mode,
        "starting build"
    );

    paths::ensure_clean_dir(&config.build_dir)?;

    let sources = discover_sources(&config.source_dir)?;
    if sources.is_empty() {
        return Err(ZbuildError::ConfigError(format!(
            "no source files found under `{}`",
            config.source_dir.display()
        )));
    }
    info!(count = sources.len(), "discovered source files");

    let platform = Platform::resolve(&config.target)?;

    let mut options = platform.flags(config.mode, &config.target);
    options.extend(
        libs::required_package_flags(runner.as_ref(), &config.pkg_config_packages).await?,
    );
    debug!(?options, "resolved build options");

    let tasks = sources
        .iter()
        .map(|source| {
            let output = paths::object_output_path(
                &source.path,
                source.family,
                &config.source_dir,
                &config.build_dir,
            )?;
            Ok(CompileTask {
                source: source.clone(),
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let jobs = config.jobs.unwrap_or_else(num_cpus::get);
    let options = Arc::new(options);
    let artifacts = sched::run_all(tasks, Arc::clone(&runner), Arc::clone(&options), jobs).await?;

    // Object and executable naming conventions differ on Windows targets;
    // the rewrite happens once, after compilation and before the link.
    let artifacts = platform.finalize_artifacts(artifacts);
    let output = config.build_dir.join(platform.executable_name(&config.output));

    exec::zig::link_executable(runner.as_ref(), &artifacts, &output, &options).await
}

/// Print the resolved configuration and discovered sources, run nothing.
fn print_dry_run(config: &BuildConfig) -> Result<()> {
    println!("zbuild dry-run");
    println!("  source_dir = {}", config.source_dir.display());
    println!("  build_dir  = {}", config.build_dir.display());
    println!("  target     = {}", config.target);
    println!("  mode       = {}", config.mode);
    println!("  output     = {}", config.output);
    if let Some(jobs) = config.jobs {
        println!("  jobs       = {jobs}");
    }
    if !config.pkg_config_packages.is_empty() {
        println!("  libs       = {:?}", config.pkg_config_packages);
    }
    println!();

    let sources = discover_sources(&config.source_dir)?;
    println!("sources ({}):", sources.len());
    for source in &sources {
        let family = match source.family {
            SourceFamily::Zig => "zig",
            SourceFamily::C => "c",
            SourceFamily::Cpp => "c++",
        };
        println!("  - [{family}] {}", source.path.display());
    }

    Ok(())
}
