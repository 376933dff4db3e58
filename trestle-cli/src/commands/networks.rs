// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ManifestArgs, error::TrestleCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    manifest: ManifestArgs,
}

pub fn exec(args: Args) -> TrestleCliResult {
    let manifest = args.manifest.load()?;
    for name in manifest.network_names() {
        let network = manifest.network(name)?;
        let signing = if network.requires_provider() {
            "signs with env credentials"
        } else {
            "signs with node accounts"
        };
        println!(
            "{name} ({}): {} chain={} confirmations={} timeout_blocks={} skip_dry_run={} {signing}",
            network.kind(),
            network.endpoint(),
            network.network_id(),
            network.confirmations(),
            network.timeout_blocks(),
            network.skip_dry_run(),
        );
    }
    Ok(())
}
