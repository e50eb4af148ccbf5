// src/source/paths.rs

//! Build-path translation and build-directory lifecycle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ZbuildError};
use crate::source::SourceFamily;

/// Recreate a directory empty. Destructive: an existing directory is
/// deleted first, so no stale artifacts survive across builds.
pub fn ensure_clean_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Map a source path under `source_dir` to its object path under
/// `build_dir`.
///
/// The relative structure is mirrored; the extension becomes `.o` for C/C++
/// and is stripped for Zig (the compiler appends the object extension when
/// emitting). Pure: no directories are created here.
pub fn object_output_path(
    source: &Path,
    family: SourceFamily,
    source_dir: &Path,
    build_dir: &Path,
) -> Result<PathBuf> {
    let relative = source.strip_prefix(source_dir).map_err(|_| {
        ZbuildError::ConfigError(format!(
            "source file `{}` is not under the source directory `{}`",
            source.display(),
            source_dir.display()
        ))
    })?;

    let mut output = build_dir.join(relative);
    match family {
        SourceFamily::Zig => {
            output.set_extension("");
        }
        SourceFamily::C | SourceFamily::Cpp => {
            output.set_extension("o");
        }
    }

    Ok(output)
}
