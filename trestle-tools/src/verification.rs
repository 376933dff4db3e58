// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Inputs for the contract-verification plugin.

use crate::manifest::{api_keys, ApiKey, DeployManifest, FILENAME};

/// Plugin name the external deploy tool loads for explorer verification.
pub const VERIFY_PLUGIN: &str = "verify";

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("the {plugin:?} plugin is not enabled in {file}", plugin = VERIFY_PLUGIN, file = FILENAME)]
    PluginNotEnabled,
    #[error("no API key for service {service:?}; add it to [api_keys] or set {env}", env = api_keys::env_key(.service))]
    MissingApiKey { service: String },
}

/// Everything the verification plugin needs for one explorer service.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifierConfig {
    pub service: String,
    pub api_key: ApiKey,
}

impl VerifierConfig {
    /// Assembles the plugin inputs for a service, or says what is missing.
    pub fn resolve(manifest: &DeployManifest, service: &str) -> Result<Self, VerificationError> {
        if !manifest.plugin_enabled(VERIFY_PLUGIN) {
            return Err(VerificationError::PluginNotEnabled);
        }
        let api_key = manifest.api_keys.resolve(service).ok_or_else(|| {
            VerificationError::MissingApiKey {
                service: service.to_string(),
            }
        })?;
        Ok(Self {
            service: service.to_string(),
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ApiKeys;

    fn manifest(plugins: &[&str], keys: &[(&str, &str)]) -> DeployManifest {
        DeployManifest {
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
            api_keys: keys
                .iter()
                .map(|(service, key)| (service.to_string(), ApiKey::new(*key)))
                .collect::<ApiKeys>(),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_when_plugin_and_key_are_present() {
        let manifest = manifest(&["verify"], &[("bscscan", "ABCD1234")]);
        let config = VerifierConfig::resolve(&manifest, "bscscan").unwrap();
        assert_eq!(config.service, "bscscan");
        assert_eq!(config.api_key.reveal(), "ABCD1234");
    }

    #[test]
    fn requires_the_plugin() {
        let manifest = manifest(&[], &[("bscscan", "ABCD1234")]);
        let err = VerifierConfig::resolve(&manifest, "bscscan").unwrap_err();
        assert!(matches!(err, VerificationError::PluginNotEnabled));
    }

    #[test]
    fn requires_an_api_key() {
        let manifest = manifest(&["verify"], &[]);
        let err = VerifierConfig::resolve(&manifest, "bscscan").unwrap_err();
        assert!(matches!(err, VerificationError::MissingApiKey { .. }));
    }
}
