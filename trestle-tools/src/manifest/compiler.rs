// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Compiler version pins.

use serde::{Deserialize, Serialize};

/// Version used when the manifest does not pin one.
pub const DEFAULT_SOLC_VERSION: &str = "latest";

#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("solc version {0:?} is not an exact release like \"0.7.4\" or \"latest\"")]
    InvalidVersion(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Compilers {
    #[serde(default)]
    pub solc: SolcConfig,
}

impl Compilers {
    pub(crate) fn validate(&self) -> Result<(), CompilerError> {
        self.solc.validate()
    }
}

/// Pin for the Solidity compiler release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolcConfig {
    /// Exact release like "0.7.4", or "latest".
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_SOLC_VERSION.to_string()
}

impl SolcConfig {
    pub fn is_pinned(&self) -> bool {
        self.version != DEFAULT_SOLC_VERSION
    }

    pub(crate) fn validate(&self) -> Result<(), CompilerError> {
        if !self.is_pinned() || is_exact_release(&self.version) {
            Ok(())
        } else {
            Err(CompilerError::InvalidVersion(self.version.clone()))
        }
    }
}

/// Whether a version string names an exact `major.minor.patch` release.
fn is_exact_release(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
