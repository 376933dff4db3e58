// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Provider factories derived from network definitions.

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};

use crate::{
    credentials::{CredentialError, CredentialSet},
    manifest::network::NetworkDefinition,
};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Credential(#[from] CredentialError),

    #[error("local targets sign with node-managed accounts and have no wallet")]
    LocalSigning,
}

/// Lazily connects a deployment target to its JSON-RPC endpoint.
///
/// Construction performs no network I/O. Credentials are captured up front,
/// so a remote target without keys fails before anything touches the wire.
#[derive(Debug, Clone)]
pub enum ProviderFactory {
    /// Local node; transactions are signed by the node's own accounts.
    Unsigned { endpoint: String },
    /// Remote endpoint signed with the ambient credential set.
    Signed {
        endpoint: String,
        network_id: u64,
        credentials: CredentialSet,
    },
}

impl NetworkDefinition {
    /// Derives the provider factory for this target.
    ///
    /// Remote definitions refuse an empty credential set instead of falling
    /// back to unsigned submission.
    pub fn provider_factory(
        &self,
        credentials: &CredentialSet,
    ) -> Result<ProviderFactory, CredentialError> {
        match self {
            Self::Local(_) => Ok(ProviderFactory::Unsigned {
                endpoint: self.endpoint(),
            }),
            Self::Remote(remote) => {
                if credentials.is_empty() {
                    return Err(CredentialError::Unavailable);
                }
                Ok(ProviderFactory::Signed {
                    endpoint: remote.url.clone(),
                    network_id: remote.network_id,
                    credentials: credentials.clone(),
                })
            }
        }
    }
}

impl ProviderFactory {
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Unsigned { endpoint } | Self::Signed { endpoint, .. } => endpoint,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed { .. })
    }

    /// The wallet transactions are signed with, `None` for local targets.
    pub fn wallet(&self) -> Result<Option<EthereumWallet>, CredentialError> {
        match self {
            Self::Unsigned { .. } => Ok(None),
            Self::Signed {
                network_id,
                credentials,
                ..
            } => build_wallet(credentials, *network_id).map(Some),
        }
    }

    /// Connects without signing capability, for status probes and reads.
    pub async fn connect(&self) -> Result<impl Provider, ProviderError> {
        debug!(@grey, "connecting to RPC: {}", self.endpoint().lavender());
        let provider = ProviderBuilder::new().connect(self.endpoint()).await?;
        Ok(provider)
    }

    /// Connects with the wallet attached for transaction submission.
    pub async fn connect_signed(&self) -> Result<impl Provider + WalletProvider, ProviderError> {
        let Self::Signed {
            endpoint,
            network_id,
            credentials,
        } = self
        else {
            return Err(ProviderError::LocalSigning);
        };
        let wallet = build_wallet(credentials, *network_id)?;
        debug!(@grey, "connecting to RPC: {}", endpoint.lavender());
        let provider = ProviderBuilder::new().wallet(wallet).connect(endpoint).await?;
        Ok(provider)
    }
}

/// Builds a wallet with one signer per key. The first key becomes the
/// default sender; every signer is pinned to the target's chain id.
fn build_wallet(
    credentials: &CredentialSet,
    chain_id: u64,
) -> Result<EthereumWallet, CredentialError> {
    let mut signers = credentials.keys().enumerate().map(|(index, key)| {
        PrivateKeySigner::from_bytes(key)
            .map(|signer| signer.with_chain_id(Some(chain_id)))
            .map_err(|_| CredentialError::Rejected { index })
    });
    let first = signers.next().ok_or(CredentialError::Unavailable)??;
    let mut wallet = EthereumWallet::new(first);
    for signer in signers {
        wallet.register_signer(signer?);
    }
    debug!(@grey, "derived wallet with {} signer(s)", credentials.len());
    Ok(wallet)
}
