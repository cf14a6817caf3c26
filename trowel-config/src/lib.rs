// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration for Trowel projects.
//!
//! A Trowel project is parameterized by a single `Trowel.toml` document holding the
//! network connection profiles used to reach a node and the compiler version pin
//! used for reproducible builds. This crate defines that document's schema, loads
//! and stores it, validates its structural properties, and edits it in place
//! without disturbing the author's formatting.
//!
//! The document carries no behavior of its own. Resolving a pinned compiler
//! version or reaching a configured endpoint is the business of the tool
//! consuming it.

pub mod config;
pub(crate) mod error;
pub mod ops;

pub use config::{
    compiler::{CompilerSpec, SolcConfig},
    edit::ConfigMut,
    network::{NetworkId, NetworkProfile},
    Config, FILENAME,
};
pub use error::{Error, Result};
