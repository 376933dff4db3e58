// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use trestle_tools::manifest::{self, DeployManifest, ManifestError, FILENAME};

#[derive(Debug, clap::Args)]
pub struct ManifestArgs {
    /// Path to the deployment manifest
    #[arg(short, long, default_value = FILENAME)]
    pub config: PathBuf,
}

impl ManifestArgs {
    pub fn load(&self) -> Result<DeployManifest, ManifestError> {
        manifest::load(&self.config)
    }
}
