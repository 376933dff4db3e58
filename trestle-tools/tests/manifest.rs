// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use trestle_tools::credentials::{CredentialError, CredentialSet};
use trestle_tools::manifest::{self, ManifestError, NetworkId};
use trestle_tools::verification::VerifierConfig;

const REFERENCE_MANIFEST: &str = r#"
plugins = ["verify"]

[api_keys]
bscscan = "ABCD1234"

[networks.development]
host = "127.0.0.1"
port = 8545
network_id = "*"

[networks.testnet]
url = "https://data-seed-prebsc-2-s1.binance.org:8545/"
network_id = 97
confirmations = 10
timeout_blocks = 200
skip_dry_run = true

[networks.bsc]
url = "https://bsc-dataseed1.binance.org"
network_id = 56
confirmations = 10
timeout_blocks = 200
skip_dry_run = true

[compilers.solc]
version = "0.7.4"
"#;

const TEST_KEY: &str = "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

fn write_manifest(dir: &Path, contents: &str) {
    fs::write(dir.join(manifest::FILENAME), contents).unwrap();
}

#[test]
fn loads_reference_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);

    let loaded = manifest::load_dir(dir.path()).unwrap();
    assert_eq!(loaded.plugins, vec!["verify"]);
    assert_eq!(loaded.network_names(), vec!["bsc", "development", "testnet"]);
    assert_eq!(loaded.compilers.solc.version, "0.7.4");

    let development = loaded.network("development").unwrap();
    assert_eq!(development.kind(), "local");
    assert_eq!(development.endpoint(), "http://127.0.0.1:8545");
    assert_eq!(development.network_id(), NetworkId::Any);
    assert!(!development.requires_provider());

    let testnet = loaded.network("testnet").unwrap();
    assert_eq!(testnet.kind(), "remote");
    assert_eq!(
        testnet.endpoint(),
        "https://data-seed-prebsc-2-s1.binance.org:8545/"
    );
    assert_eq!(testnet.network_id(), NetworkId::Id(97));
    assert_eq!(testnet.confirmations(), 10);
    assert_eq!(testnet.timeout_blocks(), 200);
    assert!(testnet.skip_dry_run());
    assert!(testnet.requires_provider());

    let bsc = loaded.network("bsc").unwrap();
    assert_eq!(bsc.network_id(), NetworkId::Id(56));
    assert!(bsc.requires_provider());
}

#[test]
fn loading_twice_yields_equal_manifests() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);

    let first = manifest::load_dir(dir.path()).unwrap();
    let second = manifest::load_dir(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_manifest_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = manifest::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Missing));
}

#[test]
fn manifest_without_networks_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "plugins = [\"verify\"]\n");
    let err = manifest::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::NoNetworks));
}

#[test]
fn unknown_network_lookup_fails() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);

    let loaded = manifest::load_dir(dir.path()).unwrap();
    let err = loaded.network("ropsten").unwrap_err();
    assert!(matches!(err, ManifestError::UnknownNetwork(name) if name == "ropsten"));
}

#[test]
fn malformed_toml_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "networks = {\n");
    let err = manifest::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::TomlRead(_)));
}

#[test]
fn network_with_both_shapes_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        r#"
[networks.broken]
host = "127.0.0.1"
port = 8545
url = "https://bsc-dataseed1.binance.org"
network_id = 56
"#,
    );
    let err = manifest::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::TomlRead(_)));
}

#[test]
fn network_with_bad_scheme_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        r#"
[networks.bsc]
url = "ftp://bsc-dataseed1.binance.org"
network_id = 56
"#,
    );
    let err = manifest::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Network(_)));
}

#[test]
fn local_network_builds_factory_without_credentials() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let loaded = manifest::load_dir(dir.path()).unwrap();

    let factory = loaded
        .network("development")
        .unwrap()
        .provider_factory(&CredentialSet::default())
        .unwrap();
    assert!(!factory.is_signed());
}

#[test]
fn remote_network_refuses_empty_credentials() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let loaded = manifest::load_dir(dir.path()).unwrap();

    for name in ["testnet", "bsc"] {
        let err = loaded
            .network(name)
            .unwrap()
            .provider_factory(&CredentialSet::default())
            .unwrap_err();
        assert!(matches!(err, CredentialError::Unavailable), "network {name}");
    }
}

#[test]
fn remote_network_builds_signed_factory() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let loaded = manifest::load_dir(dir.path()).unwrap();

    let credentials = CredentialSet::parse(TEST_KEY).unwrap();
    let factory = loaded
        .network("bsc")
        .unwrap()
        .provider_factory(&credentials)
        .unwrap();
    assert!(factory.is_signed());
    assert_eq!(factory.endpoint(), "https://bsc-dataseed1.binance.org");
}

#[test]
fn manifest_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let loaded = manifest::load_dir(dir.path()).unwrap();

    let rendered = toml::to_string(&loaded).unwrap();
    let reparsed: manifest::DeployManifest = toml::from_str(&rendered).unwrap();
    assert_eq!(loaded, reparsed);
}

#[test]
fn module_errors_convert_into_the_umbrella_error() {
    fn load_and_sign(dir: &Path) -> trestle_tools::Result<()> {
        let manifest = manifest::load_dir(dir)?;
        let credentials = CredentialSet::parse("")?;
        manifest.network("bsc")?.provider_factory(&credentials)?;
        Ok(())
    }

    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let err = load_and_sign(dir.path()).unwrap_err();
    assert!(matches!(err, trestle_tools::Error::Credential(_)));
}

#[test]
fn verification_inputs_resolve_from_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), REFERENCE_MANIFEST);
    let loaded = manifest::load_dir(dir.path()).unwrap();

    let config = VerifierConfig::resolve(&loaded, "bscscan").unwrap();
    assert_eq!(config.api_key.reveal(), "ABCD1234");
    assert_eq!(format!("{:?}", config.api_key), "ApiKey(********)");
}
