// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::config::{Config, ConfigError, FILENAME};

/// Errors which may occur from initializing a Trowel configuration.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Initialize a `Trowel.toml` in an existing project directory.
///
/// Writes the default document: a `development` profile pointing at a local
/// node and the default solc pin. Refuses to overwrite an existing file, since
/// that file is authored by hand.
pub fn init(path: impl AsRef<Path>) -> Result<(), InitError> {
    let path = path.as_ref().join(FILENAME);
    if path.exists() {
        return Err(InitError::AlreadyExists(path.display().to_string()));
    }

    Config::default().store(&path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_default_document() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();

        let config = Config::load(dir.path().join(FILENAME)).unwrap();
        assert_eq!(config, Config::default());
        config.validate().unwrap();
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();
        assert!(matches!(
            init(dir.path()),
            Err(InitError::AlreadyExists(_))
        ));
    }
}
