// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Explorer API keys.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

const REDACTED: &str = "********";

/// Environment variable overriding the key for a service, derived as
/// `TRESTLE_API_KEY_<SERVICE>`.
pub fn env_key(service: &str) -> String {
    let service = service.to_uppercase().replace('-', "_");
    format!("TRESTLE_API_KEY_{service}")
}

/// Keys for block-explorer services, keyed by service name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKeys(HashMap<String, ApiKey>);

impl ApiKeys {
    /// Resolves the key for a service.
    ///
    /// The environment wins over the manifest so keys can stay out of
    /// version control. Empty values count as absent.
    pub fn resolve(&self, service: &str) -> Option<ApiKey> {
        if let Ok(value) = std::env::var(env_key(service)) {
            if !value.is_empty() {
                return Some(ApiKey(value));
            }
        }
        self.0.get(service).filter(|key| !key.0.is_empty()).cloned()
    }

    /// Declared service names, sorted for stable output.
    pub fn services(&self) -> Vec<&str> {
        let mut services: Vec<_> = self.0.keys().map(String::as_str).collect();
        services.sort_unstable();
        services
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with every key masked, for display surfaces.
    pub fn redacted(&self) -> Self {
        Self(
            self.0
                .keys()
                .map(|service| (service.clone(), ApiKey(REDACTED.to_string())))
                .collect(),
        )
    }
}

impl FromIterator<(String, ApiKey)> for ApiKeys {
    fn from_iter<I: IntoIterator<Item = (String, ApiKey)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An opaque explorer API key. Debug and Display output is masked.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for handing to the verification plugin.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({REDACTED})")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
