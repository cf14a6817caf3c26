// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("{0}")]
    Compiler(#[from] crate::config::compiler::CompilerError),
    #[error("{0}")]
    Network(#[from] crate::config::network::NetworkError),
    #[error("{0}")]
    Edit(#[from] crate::config::edit::EditError),
    #[error("{0}")]
    Init(#[from] crate::ops::init::InitError),
}
