// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiler version pins.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Version of solc pinned when no document specifies one
pub const DEFAULT_SOLC_VERSION: &str = "0.8.0";

lazy_static! {
    static ref SEMVER: Regex = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("\"{0}\" is not a semantic version (expected MAJOR.MINOR.PATCH)")]
    InvalidVersion(String),
}

/// Compiler selection for the project.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompilerSpec {
    pub solc: SolcConfig,
}

/// Version pin for the Solidity compiler.
///
/// The pin only selects a build; whether that build exists and can be
/// installed is discovered by the consuming tool when it runs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SolcConfig {
    pub version: String,
}

impl SolcConfig {
    pub fn validate(&self) -> Result<(), CompilerError> {
        if SEMVER.is_match(&self.version) {
            Ok(())
        } else {
            Err(CompilerError::InvalidVersion(self.version.clone()))
        }
    }
}

impl Default for CompilerSpec {
    fn default() -> Self {
        Self {
            solc: SolcConfig::default(),
        }
    }
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_SOLC_VERSION.to_owned(),
        }
    }
}
