// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Named deployment targets.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// JSON-RPC URL schemes a remote endpoint may use.
const SCHEMES: &[&str] = &["http://", "https://", "ws://", "wss://"];

fn default_timeout_blocks() -> u64 {
    50
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("network {network:?} has no usable host")]
    EmptyHost { network: String },
    #[error("network {network:?} endpoint {url:?} is not an http(s) or ws(s) URL")]
    InvalidEndpoint { network: String, url: String },
}

/// A named deployment target.
///
/// Exactly one shape per target: either a node on the local machine
/// addressed by host and port, or a remote endpoint addressed by URL and
/// signed with ambient credentials. The two field sets are disjoint, so a
/// definition mixing them fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkDefinition {
    Local(LocalNetwork),
    Remote(RemoteNetwork),
}

/// A development node on the local machine, signing with its own accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalNetwork {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub network_id: NetworkId,
}

/// A remote endpoint reached over JSON-RPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteNetwork {
    /// Endpoint transactions are submitted through.
    pub url: String,
    /// Chain id the endpoint must report.
    pub network_id: u64,
    /// Block confirmations awaited before a deployment counts as final.
    #[serde(default)]
    pub confirmations: u64,
    /// Blocks to wait on a pending transaction before timing out.
    #[serde(default = "default_timeout_blocks")]
    pub timeout_blocks: u64,
    /// Skip the pre-flight simulation before broadcasting.
    #[serde(default)]
    pub skip_dry_run: bool,
}

impl NetworkDefinition {
    /// The JSON-RPC URL for this target.
    pub fn endpoint(&self) -> String {
        match self {
            Self::Local(local) => format!("http://{}:{}", local.host, local.port),
            Self::Remote(remote) => remote.url.clone(),
        }
    }

    /// Whether deployments against this target need a signing provider
    /// derived from ambient credentials. Local nodes sign with their own
    /// unlocked accounts.
    pub fn requires_provider(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// The chain id this target accepts.
    pub fn network_id(&self) -> NetworkId {
        match self {
            Self::Local(local) => local.network_id,
            Self::Remote(remote) => NetworkId::Id(remote.network_id),
        }
    }

    pub fn confirmations(&self) -> u64 {
        match self {
            Self::Local(_) => 0,
            Self::Remote(remote) => remote.confirmations,
        }
    }

    pub fn timeout_blocks(&self) -> u64 {
        match self {
            Self::Local(_) => default_timeout_blocks(),
            Self::Remote(remote) => remote.timeout_blocks,
        }
    }

    pub fn skip_dry_run(&self) -> bool {
        match self {
            Self::Local(_) => false,
            Self::Remote(remote) => remote.skip_dry_run,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), NetworkError> {
        match self {
            Self::Local(local) => {
                if local.host.trim().is_empty() {
                    return Err(NetworkError::EmptyHost {
                        network: name.to_string(),
                    });
                }
                Ok(())
            }
            Self::Remote(remote) => check_endpoint(name, &remote.url),
        }
    }
}

pub(crate) fn check_endpoint(network: &str, url: &str) -> Result<(), NetworkError> {
    if SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(NetworkError::InvalidEndpoint {
            network: network.to_string(),
            url: url.to_string(),
        })
    }
}

/// Chain id constraint for a deployment target.
///
/// `Any` is spelled `"*"` in the manifest and matches whatever the node
/// reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkId {
    #[default]
    Any,
    Id(u64),
}

impl NetworkId {
    pub fn matches(&self, chain_id: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => *id == chain_id,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("network id must be numeric or \"*\", got {0:?}")]
pub struct ParseNetworkIdError(String);

impl FromStr for NetworkId {
    type Err = ParseNetworkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Self::Any);
        }
        s.parse()
            .map(Self::Id)
            .map_err(|_| ParseNetworkIdError(s.to_string()))
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Id(id) => serializer.serialize_u64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(u64),
            Other(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Ok(Self::Id(id)),
            Repr::Other(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
