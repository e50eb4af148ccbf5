// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running external toolchain
//! commands, using `tokio::process::Command`, and mapping their failures to
//! crate errors.
//!
//! - [`runner`] owns the process-spawning primitive behind the
//!   [`CommandRunner`] trait, so tests can swap in a fake that never spawns
//!   real processes.
//! - [`zig`] builds the concrete compile/link invocations for the Zig
//!   toolchain and translates their exit codes into typed errors.

pub mod runner;
pub mod zig;

pub use runner::{CommandOutput, CommandRunner, CommandSpec, ProcessRunner};
