// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! Tools for working with trestle deployment manifests.
//!
//! A `Trestle.toml` manifest declares named deployment targets (local dev
//! nodes or remote JSON-RPC endpoints), the pinned compiler release, and the
//! block-explorer verification setup. This crate loads and validates the
//! manifest, sources signing credentials from the environment, and derives
//! the provider factories an external deploy tool connects with.

#[macro_use]
mod macros;

pub mod credentials;
pub mod manifest;
pub mod project;
pub mod provider;
pub mod verification;

pub mod utils;

pub(crate) mod error;

pub use credentials::CredentialSet;
pub use error::{Error, Result};
pub use manifest::{load, load_dir, DeployManifest};
pub use provider::ProviderFactory;
pub use verification::VerifierConfig;
