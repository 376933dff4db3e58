// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use trestle_tools::{manifest::FILENAME, project};

use crate::error::TrestleCliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to an existing directory
    #[clap(default_value = ".")]
    path: PathBuf,
}

pub fn exec(args: Args) -> TrestleCliResult {
    if project::init_manifest(&args.path)? {
        println!("created {FILENAME}");
    } else {
        println!("{FILENAME} already exists");
    }
    Ok(())
}
