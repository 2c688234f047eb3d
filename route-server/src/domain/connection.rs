//! Connection kinds between adjacent stations.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// How two adjacent stations are linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionType {
    /// Consecutive stops on the same line.
    Ride,
    /// A walking transfer between platforms of different lines.
    Interchange,
}

impl ConnectionType {
    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Ride => "ride",
            ConnectionType::Interchange => "interchange",
        }
    }

    pub fn is_interchange(&self) -> bool {
        matches!(self, ConnectionType::Interchange)
    }
}

impl FromStr for ConnectionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ride" => Ok(ConnectionType::Ride),
            "interchange" => Ok(ConnectionType::Interchange),
            _ => Err(DomainError::UnknownConnectionType(s.to_string())),
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
