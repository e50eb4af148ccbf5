// src/source/discover.rs

//! Source file discovery.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::Result;
use crate::source::{SourceFamily, SourceFile};

/// The Zig entry point expected directly under the source root.
pub const ZIG_ENTRY: &str = "main.zig";

/// Discover source files under `source_dir`.
///
/// The Zig entry point is included only when it exists; C/C++ files are
/// matched recursively by extension. The returned order is deterministic:
/// Zig entry first, then C files sorted by path, then C++ files sorted by
/// path.
pub fn discover_sources(source_dir: &Path) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    let entry = source_dir.join(ZIG_ENTRY);
    if entry.is_file() {
        sources.push(SourceFile::new(entry, SourceFamily::Zig));
    }

    let c_matcher = matcher_for("**/*.c")?;
    let cpp_matcher = matcher_for("**/*.cpp")?;

    let mut c_files = Vec::new();
    let mut cpp_files = Vec::new();

    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(anyhow::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if c_matcher.is_match(path) {
            c_files.push(path.to_path_buf());
        } else if cpp_matcher.is_match(path) {
            cpp_files.push(path.to_path_buf());
        }
    }

    c_files.sort();
    cpp_files.sort();

    debug!(
        c = c_files.len(),
        cpp = cpp_files.len(),
        zig = sources.len(),
        "discovered sources"
    );

    sources.extend(
        c_files
            .into_iter()
            .map(|path| SourceFile::new(path, SourceFamily::C)),
    );
    sources.extend(
        cpp_files
            .into_iter()
            .map(|path| SourceFile::new(path, SourceFamily::Cpp)),
    );

    Ok(sources)
}

fn matcher_for(pattern: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(pattern).map_err(anyhow::Error::from)?);
    let set = builder.build().map_err(anyhow::Error::from)?;
    Ok(set)
}
