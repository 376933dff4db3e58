// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Trestle.toml manifest definitions.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

pub mod api_keys;
pub mod compiler;
pub mod network;

pub use api_keys::{ApiKey, ApiKeys};
pub use compiler::{Compilers, SolcConfig};
pub use network::{LocalNetwork, NetworkDefinition, NetworkId, RemoteNetwork};

/// Filename for Trestle.toml manifest files
pub const FILENAME: &str = "Trestle.toml";

/// Plugins the external deploy tool is known to ship with.
const KNOWN_PLUGINS: &[&str] = &["verify"];

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {file}", file = FILENAME)]
    Missing,
    #[error("no networks declared in {file}", file = FILENAME)]
    NoNetworks,
    #[error("network {0:?} is not declared in {file}", file = FILENAME)]
    UnknownNetwork(String),

    #[error("{0}")]
    Network(#[from] network::NetworkError),
    #[error("{0}")]
    Compiler(#[from] compiler::CompilerError),
}

/// The deployment configuration an external deploy tool runs against.
///
/// Mirrors the manifest file: enabled plugins, explorer API keys, named
/// deployment targets and compiler pins. Constructed once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployManifest {
    /// External plugins the deploy tool should load.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Explorer API keys, keyed by service name.
    #[serde(default)]
    pub api_keys: ApiKeys,
    /// Named deployment targets.
    #[serde(default)]
    pub networks: HashMap<String, NetworkDefinition>,
    /// Compiler pins.
    #[serde(default)]
    pub compilers: Compilers,
}

impl DeployManifest {
    /// Looks up a deployment target by its symbolic name.
    pub fn network(&self, name: &str) -> Result<&NetworkDefinition, ManifestError> {
        self.networks
            .get(name)
            .ok_or_else(|| ManifestError::UnknownNetwork(name.to_string()))
    }

    /// Declared network names, sorted for stable output.
    pub fn network_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn plugin_enabled(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin == name)
    }

    /// Structural checks past deserialization.
    ///
    /// Type errors are already rejected by serde; this catches the remaining
    /// startup-fatal conditions. Unknown plugin names only warn, since the
    /// loader cannot know what the external tool has installed.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.networks.is_empty() {
            return Err(ManifestError::NoNetworks);
        }
        for (name, network) in &self.networks {
            network.validate(name)?;
        }
        self.compilers.validate()?;
        for plugin in &self.plugins {
            if !KNOWN_PLUGINS.contains(&plugin.as_str()) {
                warn!(@yellow, "unknown plugin {plugin:?} declared in {FILENAME}");
            }
        }
        Ok(())
    }
}

/// Loads and validates a manifest file.
pub fn load(path: impl AsRef<Path>) -> Result<DeployManifest, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing);
    }
    let contents = fs::read_to_string(path)?;
    let manifest: DeployManifest = toml::from_str(&contents)?;
    manifest.validate()?;
    debug!(@grey, "loaded manifest from {}", path.display().lavender());
    Ok(manifest)
}

/// Loads `Trestle.toml` from a directory.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<DeployManifest, ManifestError> {
    load(dir.as_ref().join(FILENAME))
}
