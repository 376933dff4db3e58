// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Signing credentials sourced from the environment.
//!
//! Private keys never appear in the manifest. They arrive through the
//! `TRESTLE_PRIVATE_KEYS` environment variable as a comma-separated list of
//! hex strings and stay inside [`CredentialSet`] until wallet construction.

use std::fmt;

use alloy::primitives::B256;

/// Environment variable holding comma-separated hex private keys.
pub const PRIVATE_KEYS_ENV: &str = "TRESTLE_PRIVATE_KEYS";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("a signing provider is required but no private keys are available; set {env}", env = PRIVATE_KEYS_ENV)]
    Unavailable,
    #[error("{env} contains non-unicode data", env = PRIVATE_KEYS_ENV)]
    NonUnicode,
    #[error("invalid private key at index {index}: {source}")]
    InvalidKey {
        index: usize,
        source: hex::FromHexError,
    },
    #[error("private key at index {index} must be 32 bytes, got {len}")]
    InvalidKeyLength { index: usize, len: usize },
    #[error("private key at index {index} is not a valid secp256k1 key")]
    Rejected { index: usize },
}

/// Ordered private keys for deriving a signing provider.
///
/// The first key is the default sender. Debug output shows the count alone,
/// so a set can pass through logging without leaking key material.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    keys: Vec<B256>,
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialSet({} keys)", self.keys.len())
    }
}

impl CredentialSet {
    /// Reads keys from `TRESTLE_PRIVATE_KEYS`.
    ///
    /// An unset variable yields an empty set. Whether that is an error is
    /// decided where a provider factory gets built, so targets that never
    /// sign work without any keys in the environment.
    pub fn from_env() -> Result<Self, CredentialError> {
        match std::env::var(PRIVATE_KEYS_ENV) {
            Ok(list) => Self::parse(&list),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(CredentialError::NonUnicode),
        }
    }

    /// Parses a comma-separated list of hex keys, `0x` prefixes optional.
    pub fn parse(list: &str) -> Result<Self, CredentialError> {
        let entries = list.split(',').map(str::trim).filter(|entry| !entry.is_empty());
        let mut keys = Vec::new();
        for (index, entry) in entries.enumerate() {
            let entry = entry.strip_prefix("0x").unwrap_or(entry);
            let bytes = hex::decode(entry)
                .map_err(|source| CredentialError::InvalidKey { index, source })?;
            if bytes.len() != 32 {
                return Err(CredentialError::InvalidKeyLength {
                    index,
                    len: bytes.len(),
                });
            }
            keys.push(B256::from_slice(&bytes));
        }
        Ok(Self { keys })
    }

    pub fn from_keys(keys: Vec<B256>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &B256> + '_ {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_A: &str = "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
    const KEY_B: &str = "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c952065a";

    #[test]
    fn parses_comma_separated_keys() {
        let set = CredentialSet::parse(&format!("{KEY_A},{KEY_B}")).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn prefix_and_whitespace_are_ignored() {
        let bare = CredentialSet::parse(KEY_A).unwrap();
        let decorated = CredentialSet::parse(&format!("  0x{KEY_A} , ")).unwrap();
        assert_eq!(bare, decorated);
    }

    #[test]
    fn key_order_is_preserved() {
        let set = CredentialSet::parse(&format!("{KEY_A},{KEY_B}")).unwrap();
        let keys: Vec<_> = set.keys().collect();
        assert_eq!(hex::encode(keys[0]), KEY_A);
        assert_eq!(hex::encode(keys[1]), KEY_B.trim_start_matches("0x"));
    }

    #[test]
    fn empty_list_is_an_empty_set() {
        assert!(CredentialSet::parse("").unwrap().is_empty());
        assert!(CredentialSet::parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_hex_keys() {
        let err = CredentialSet::parse("not-a-key").unwrap_err();
        assert!(matches!(err, CredentialError::InvalidKey { index: 0, .. }));
    }

    #[test]
    fn rejects_short_keys() {
        let err = CredentialSet::parse("b6b15c").unwrap_err();
        assert!(matches!(
            err,
            CredentialError::InvalidKeyLength { index: 0, len: 3 }
        ));
    }

    #[test]
    fn unset_variable_yields_empty_set() {
        std::env::remove_var(PRIVATE_KEYS_ENV);
        assert!(CredentialSet::from_env().unwrap().is_empty());
    }

    #[test]
    fn debug_never_shows_key_material() {
        let set = CredentialSet::parse(KEY_A).unwrap();
        let rendered = format!("{set:?}");
        assert_eq!(rendered, "CredentialSet(1 keys)");
        assert!(!rendered.contains("b6b15c"));
    }
}
