// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use crate::error::TrestleCliResult;

mod check;
mod config;
mod init;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Check networks, credentials and verification inputs
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Print the loaded manifest with secrets masked
    Config(config::Args),
    /// Write a starter manifest into an existing directory
    Init(init::Args),
    /// List deployment targets declared in the manifest
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> TrestleCliResult {
    match cmd {
        Command::Check(args) => check::exec(args).await,
        Command::Config(args) => config::exec(args),
        Command::Init(args) => init::exec(args),
        Command::Networks(args) => networks::exec(args),
    }
}
