// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use alloy::providers::Provider;
use eyre::eyre;
use trestle_tools::{
    credentials::CredentialSet,
    manifest::NetworkDefinition,
    provider::ProviderFactory,
    verification::{VerifierConfig, VERIFY_PLUGIN},
};

use crate::{common_args::ManifestArgs, error::TrestleCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Restrict the check to one network
    #[arg(long)]
    network: Option<String>,
    /// Connect to each endpoint and compare the reported chain id
    #[arg(long)]
    probe: bool,

    #[command(flatten)]
    manifest: ManifestArgs,
}

pub async fn exec(args: Args) -> TrestleCliResult {
    let manifest = args.manifest.load()?;
    let credentials = CredentialSet::from_env()?;

    let names = match &args.network {
        Some(name) => {
            manifest.network(name)?;
            vec![name.as_str()]
        }
        None => manifest.network_names(),
    };

    let mut failures = 0;
    for name in names {
        let network = manifest.network(name)?;
        // deriving the wallet validates the keys without connecting
        let factory = network
            .provider_factory(&credentials)
            .and_then(|factory| factory.wallet().map(|_| factory));
        match factory {
            Ok(factory) => {
                println!("{name}: ok ({}, {})", network.kind(), factory.endpoint());
                if args.probe {
                    failures += probe(name, network, &factory).await;
                }
            }
            Err(err) => {
                failures += 1;
                println!("{name}: {err}");
            }
        }
    }

    if manifest.plugin_enabled(VERIFY_PLUGIN) {
        for service in manifest.api_keys.services() {
            match VerifierConfig::resolve(&manifest, service) {
                Ok(_) => println!("verify/{service}: api key present"),
                Err(err) => {
                    failures += 1;
                    println!("verify/{service}: {err}");
                }
            }
        }
    }

    if failures > 0 {
        return Err(eyre!("{failures} check(s) failed").into());
    }
    Ok(())
}

/// Returns the number of failed probes.
async fn probe(name: &str, network: &NetworkDefinition, factory: &ProviderFactory) -> u32 {
    let provider = match factory.connect().await {
        Ok(provider) => provider,
        Err(err) => {
            println!("{name}: unreachable: {err}");
            return 1;
        }
    };
    match provider.get_chain_id().await {
        Ok(chain_id) if network.network_id().matches(chain_id) => {
            println!("{name}: chain id {chain_id} matches");
            0
        }
        Ok(chain_id) => {
            println!(
                "{name}: endpoint reports chain id {chain_id}, manifest expects {}",
                network.network_id(),
            );
            1
        }
        Err(err) => {
            println!("{name}: chain id query failed: {err}");
            1
        }
    }
}
