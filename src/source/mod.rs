// src/source/mod.rs

//! Source tree model.
//!
//! - [`discover`] walks the source directory and classifies files into
//!   families.
//! - [`paths`] owns the pure source-path → build-path translation and the
//!   destructive build-directory reset.

pub mod discover;
pub mod paths;

use std::path::PathBuf;

pub use discover::{discover_sources, ZIG_ENTRY};

/// Which compiler invocation shape applies to a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFamily {
    /// The single Zig entry point, compiled via `zig build-obj`.
    Zig,
    /// A C translation unit, compiled via `zig cc`.
    C,
    /// A C++ translation unit, compiled via `zig c++`.
    Cpp,
}

/// One discovered source file. Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub family: SourceFamily,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, family: SourceFamily) -> Self {
        Self {
            path: path.into(),
            family,
        }
    }
}
