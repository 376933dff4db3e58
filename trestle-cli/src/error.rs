// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type TrestleCliResult = Result<(), TrestleCliError>;

#[derive(Debug)]
pub struct TrestleCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl TrestleCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for TrestleCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for TrestleCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for TrestleCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<serde_json::Error> for TrestleCliError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<trestle_tools::credentials::CredentialError> for TrestleCliError {
    fn from(err: trestle_tools::credentials::CredentialError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<trestle_tools::manifest::ManifestError> for TrestleCliError {
    fn from(err: trestle_tools::manifest::ManifestError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<trestle_tools::project::ProjectError> for TrestleCliError {
    fn from(err: trestle_tools::project::ProjectError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
