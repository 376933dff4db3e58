// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Manifest(#[from] crate::manifest::ManifestError),
    #[error("{0}")]
    Credential(#[from] crate::credentials::CredentialError),
    #[error("{0}")]
    Provider(#[from] crate::provider::ProviderError),
    #[error("{0}")]
    Verification(#[from] crate::verification::VerificationError),
    #[error("{0}")]
    Project(#[from] crate::project::ProjectError),
}
