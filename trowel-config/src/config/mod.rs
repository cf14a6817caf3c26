// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `Trowel.toml` configuration document.
//!
//! The document has two unrelated halves: a map of named [`NetworkProfile`]s
//! describing how to reach a node, and a [`CompilerSpec`] pinning the contract
//! compiler. It is authored once and read whole at the start of every build or
//! deploy invocation; nothing mutates it at runtime.

use std::{collections::HashMap, fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use self::{compiler::CompilerSpec, network::NetworkProfile};

pub mod compiler;
pub mod edit;
pub mod network;

/// Filename for Trowel configuration documents
pub const FILENAME: &str = "Trowel.toml";

/// Name of the profile targeting a local development node
pub const DEV_PROFILE: &str = "development";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("missing Trowel.toml")]
    Missing,

    #[error("network profile \"{profile}\": {source}")]
    Network {
        profile: String,
        source: network::NetworkError,
    },
    #[error("{0}")]
    Compiler(#[from] compiler::CompilerError),
}

/// Load a whole configuration document from a TOML file.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    if !path.as_ref().exists() {
        return Err(ConfigError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// The Trowel configuration document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Named connection profiles. Names are unique by construction (map keys).
    #[serde(default)]
    pub networks: HashMap<String, NetworkProfile>,
    pub compilers: CompilerSpec,
}

impl Config {
    /// Read the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load(&path)?;
        log::debug!(
            "loaded {} with {} network profile(s)",
            path.as_ref().display(),
            config.networks.len(),
        );
        Ok(config)
    }

    /// Write the document to `path`, replacing whatever is there.
    ///
    /// Loses comments and formatting; use [`edit::ConfigMut`] to touch an
    /// authored file in place.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check the structural properties of the document.
    ///
    /// This is schema validation only. Whether a pinned compiler version is
    /// installable or a configured endpoint reachable is discovered by the
    /// consuming tool at use time, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, profile) in &self.networks {
            profile.validate().map_err(|source| ConfigError::Network {
                profile: name.clone(),
                source,
            })?;
        }
        self.compilers.solc.validate()?;
        Ok(())
    }

    /// The profile targeting a local development node, if configured.
    pub fn development(&self) -> Option<&NetworkProfile> {
        self.networks.get(DEV_PROFILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        let networks = HashMap::from([(DEV_PROFILE.to_owned(), NetworkProfile::default())]);
        Self {
            networks,
            compilers: CompilerSpec::default(),
        }
    }
}
