// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use trowel_config::{ops, Config, ConfigMut, NetworkId, FILENAME};

#[test]
fn init_load_edit_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILENAME);

    // A fresh project gets the default document
    ops::init(dir.path()).unwrap();
    let config = Config::load(&path).unwrap();
    config.validate().unwrap();

    let dev = config.development().unwrap();
    assert_eq!(dev.endpoint(), "http://127.0.0.1:7545");
    // wildcard profile accepts whatever id the local node reports
    assert!(dev.network_id.matches("5777"));
    assert!(dev.network_id.matches("1337"));

    // Pin a newer compiler and point development at a different node
    let mut edit = ConfigMut::read(&path).unwrap();
    edit.set_solc_version("0.8.21").unwrap();
    edit.network("development")
        .unwrap()
        .set_port(8545)
        .set_network_id(&NetworkId::from("5777"));
    edit.write().unwrap();

    let config = Config::load(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.compilers.solc.version, "0.8.21");
    let dev = config.development().unwrap();
    assert_eq!(dev.endpoint(), "http://127.0.0.1:8545");
    assert!(dev.network_id.matches("5777"));
    assert!(!dev.network_id.matches("1"));
}

#[test]
fn store_then_load_is_identity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILENAME);

    let mut config = Config::default();
    config.networks.insert(
        "sepolia".to_owned(),
        trowel_config::NetworkProfile {
            host: "rpc.sepolia.example.org".to_owned(),
            port: 8545,
            network_id: NetworkId::from("11155111"),
        },
    );

    config.store(&path).unwrap();
    let reloaded = Config::load(&path).unwrap();
    assert_eq!(config, reloaded);
}

#[test]
fn loading_missing_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join(FILENAME)).unwrap_err();
    assert_eq!(err.to_string(), "missing Trowel.toml");
}
