// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use trestle_tools::manifest::DeployManifest;

use crate::{common_args::ManifestArgs, error::TrestleCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    manifest: ManifestArgs,
}

pub fn exec(args: Args) -> TrestleCliResult {
    let manifest = args.manifest.load()?;

    if args.json {
        let redacted = DeployManifest {
            api_keys: manifest.api_keys.redacted(),
            ..manifest
        };
        println!("{}", serde_json::to_string_pretty(&redacted)?);
        return Ok(());
    }

    print_summary(&manifest);
    Ok(())
}

fn print_summary(manifest: &DeployManifest) {
    let plugins = if manifest.plugins.is_empty() {
        "(none)".to_string()
    } else {
        manifest.plugins.join(", ")
    };
    let services = if manifest.api_keys.is_empty() {
        "(none)".to_string()
    } else {
        manifest.api_keys.services().join(", ")
    };
    println!("plugins: {plugins}");
    println!("api keys: {services}");
    println!("solc: {}", manifest.compilers.solc.version);
    println!("networks:");
    let mut networks: Vec<_> = manifest.networks.iter().collect();
    networks.sort_by(|a, b| a.0.cmp(b.0));
    for (name, network) in networks {
        println!(
            "  {name} ({}): {} chain={}",
            network.kind(),
            network.endpoint(),
            network.network_id(),
        );
    }
}
