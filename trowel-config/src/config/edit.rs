// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-place edits to `Trowel.toml` files.
//!
//! The document is authored by hand, so tooling that rewrites it must keep the
//! author's comments and layout intact. [`ConfigMut`] works on a
//! [`toml_edit::DocumentMut`] instead of the typed [`Config`](super::Config)
//! for exactly that reason.

use std::{fs, path::PathBuf};

use toml_edit::{DocumentMut, Item, Table, Value};

use super::network::NetworkId;

/// Make modifications to a `Trowel.toml` file.
#[derive(Debug)]
pub struct ConfigMut {
    path: PathBuf,
    doc: DocumentMut,
}

impl ConfigMut {
    /// Read the `Trowel.toml` file from a specific path.
    ///
    /// The path is stored as well for simple writing after it is edited.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self, EditError> {
        let path = path.into();
        let doc = fs::read_to_string(&path)?.parse()?;
        Ok(ConfigMut { path, doc })
    }

    /// Write all modifications back to the `Trowel.toml` file.
    pub fn write(&self) -> Result<(), EditError> {
        fs::write(&self.path, self.doc.to_string())?;
        Ok(())
    }

    /// Change the pinned solc version, creating the `[compilers.solc]` table
    /// if it does not exist.
    pub fn set_solc_version(&mut self, version: &str) -> Result<(), EditError> {
        let solc = subtable(subtable(self.doc.as_table_mut(), "compilers")?, "solc")?;
        solc["version"] = toml_edit::value(version);
        Ok(())
    }

    /// Make modifications to the `[networks.<name>]` table, creating it if it
    /// does not exist.
    pub fn network(&mut self, name: &str) -> Result<Network<'_>, EditError> {
        let table = subtable(subtable(self.doc.as_table_mut(), "networks")?, name)?;
        Ok(Network { table })
    }
}

/// A specific connection profile table (`[networks.development]` for example).
#[derive(Debug)]
pub struct Network<'a> {
    table: &'a mut Table,
}

impl Network<'_> {
    pub fn set_host(&mut self, host: &str) -> &mut Self {
        self.table["host"] = toml_edit::value(host);
        self
    }

    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.table["port"] = toml_edit::value(i64::from(port));
        self
    }

    pub fn set_network_id(&mut self, id: &NetworkId) -> &mut Self {
        self.table["network_id"] = Item::Value(Value::from(id.to_string()));
        self
    }
}

/// Get or create a named table inside a given table.
///
/// The parent is kept implicit so an empty `[networks]` header is not emitted
/// when only its inner tables carry values.
fn subtable<'a>(table: &'a mut Table, key: &str) -> Result<&'a mut Table, EditError> {
    table.set_implicit(true);
    let inner = table
        .entry(key)
        .or_insert_with(|| Table::new().into())
        .as_table_mut()
        .ok_or(EditError::Invalid)?;
    Ok(inner)
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml edit error: {0}")]
    TomlEdit(#[from] toml_edit::TomlError),

    #[error("invalid trowel config")]
    Invalid,
}
