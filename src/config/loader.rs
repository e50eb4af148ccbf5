// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::Manifest;
use crate::errors::{Result, ZbuildError};

/// Load a manifest from a given path.
///
/// This only performs TOML deserialization; semantic validation of the
/// resolved configuration lives in [`validate`](crate::config::validate).
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let manifest: Manifest = toml::from_str(&contents)?;

    Ok(manifest)
}

/// Load the manifest for a build invocation.
///
/// - If `--config <path>` was given, that file must exist and parse.
/// - Otherwise `zbuild.toml` in the current directory is used when present,
///   and built-in defaults apply when it is not.
pub fn load_manifest(explicit_path: Option<&str>) -> Result<Manifest> {
    match explicit_path {
        Some(path) => {
            if !Path::new(path).is_file() {
                return Err(ZbuildError::ConfigError(format!(
                    "manifest `{path}` not found"
                )));
            }
            load_from_path(path)
        }
        None => {
            let default = default_manifest_path();
            if default.is_file() {
                load_from_path(default)
            } else {
                Ok(Manifest::default())
            }
        }
    }
}

/// Default manifest location: `zbuild.toml` in the current working directory.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from("zbuild.toml")
}
