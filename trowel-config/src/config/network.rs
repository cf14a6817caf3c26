// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network connection profiles.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Host of the default local development node
pub const DEV_HOST: &str = "127.0.0.1";
/// Port of the default local development node
pub const DEV_PORT: u16 = 7545;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("host must not be empty")]
    EmptyHost,
    #[error("port must be in 1..=65535")]
    InvalidPort,
}

/// A named set of parameters for reaching a node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkProfile {
    /// IP literal or hostname, without scheme or port.
    pub host: String,
    pub port: u16,
    pub network_id: NetworkId,
}

impl NetworkProfile {
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.host.is_empty() {
            return Err(NetworkError::EmptyHost);
        }
        if self.port == 0 {
            return Err(NetworkError::InvalidPort);
        }
        Ok(())
    }

    /// HTTP endpoint for connections to the configured node.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self {
            host: DEV_HOST.to_owned(),
            port: DEV_PORT,
            network_id: NetworkId::Any,
        }
    }
}

/// Expected network identifier of the node behind a profile.
///
/// Stored as a plain string in the document; the literal `"*"` means any
/// reported identifier is acceptable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkId {
    Any,
    Id(String),
}

impl NetworkId {
    /// Whether a node reporting `id` satisfies this profile.
    ///
    /// Concrete identifiers compare as raw strings; their syntax is left to
    /// the consuming tool.
    pub fn matches(&self, id: &str) -> bool {
        match self {
            NetworkId::Any => true,
            NetworkId::Id(expected) => expected == id,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => f.write_str("*"),
            NetworkId::Id(id) => f.write_str(id),
        }
    }
}

impl From<&str> for NetworkId {
    fn from(s: &str) -> Self {
        match s {
            "*" => NetworkId::Any,
            id => NetworkId::Id(id.to_owned()),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = NetworkId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a network identifier string or \"*\"")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<NetworkId, E> {
                Ok(NetworkId::from(s))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_any_id() {
        assert!(NetworkId::Any.matches("1"));
        assert!(NetworkId::Any.matches("5777"));
        assert!(NetworkId::Any.matches(""));
    }

    #[test]
    fn concrete_id_matches_only_itself() {
        let id = NetworkId::from("5777");
        assert!(id.matches("5777"));
        assert!(!id.matches("1"));
        assert!(!id.matches("*"));
    }

    #[test]
    fn wildcard_round_trips_as_star() {
        assert_eq!(NetworkId::from("*"), NetworkId::Any);
        assert_eq!(NetworkId::Any.to_string(), "*");
        assert_eq!(NetworkId::from("1337").to_string(), "1337");
    }

    #[test]
    fn endpoint_is_http_host_port() {
        let profile = NetworkProfile::default();
        assert_eq!(profile.endpoint(), "http://127.0.0.1:7545");
    }

    #[test]
    fn default_profile_validates() {
        NetworkProfile::default().validate().unwrap();
    }

    #[test]
    fn zero_port_is_rejected() {
        let profile = NetworkProfile {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(NetworkError::InvalidPort)
        ));
    }

    #[test]
    fn empty_host_is_rejected() {
        let profile = NetworkProfile {
            host: String::new(),
            ..Default::default()
        };
        assert!(matches!(profile.validate(), Err(NetworkError::EmptyHost)));
    }
}
