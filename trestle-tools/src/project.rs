// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Starter manifests for new projects.

use std::{fs, path::Path};

use crate::manifest::FILENAME;

const TEMPLATE: &str = include_str!("../templates/Trestle.toml");

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a starter manifest into `dir` unless one already exists.
///
/// Returns whether a file was created. An existing manifest is never
/// overwritten, so running init twice is safe.
pub fn init_manifest(dir: impl AsRef<Path>) -> Result<bool, ProjectError> {
    let path = dir.as_ref().join(FILENAME);
    if path.exists() {
        info!(@grey, "{} already exists, leaving it unchanged", path.display());
        return Ok(false);
    }
    fs::write(&path, TEMPLATE)?;
    info!(@grey, "wrote starter manifest to {}", path.display().lavender());
    Ok(true)
}
