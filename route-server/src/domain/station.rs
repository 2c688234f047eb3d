//! Station identifier type.

use std::fmt;

use super::DomainError;

/// A normalized station identifier (e.g. `AG10`, `KJ13`).
///
/// Identifiers are non-empty, carry no surrounding whitespace and are
/// unchanged by uppercasing. Any `StationId` value is normalized by construction, so
/// two ids that differ only in case or padding compare equal once parsed
/// through [`StationId::parse_normalized`].
///
/// # Examples
///
/// ```
/// use route_server::domain::StationId;
///
/// let id = StationId::parse_normalized(" ag10 ").unwrap();
/// assert_eq!(id.as_str(), "AG10");
///
/// // Strict parsing rejects un-normalized input
/// assert!(StationId::parse("ag10").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse an already-normalized station identifier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() {
            return Err(DomainError::InvalidStationId("must not be empty"));
        }
        if s.trim() != s {
            return Err(DomainError::InvalidStationId(
                "must not have surrounding whitespace",
            ));
        }
        if s.to_uppercase() != s {
            return Err(DomainError::InvalidStationId("must be uppercase"));
        }
        if s.chars().any(char::is_control) {
            return Err(DomainError::InvalidStationId(
                "must not contain control characters",
            ));
        }

        Ok(StationId(s.to_string()))
    }

    /// Trim and uppercase the input, then parse it.
    pub fn parse_normalized(s: &str) -> Result<Self, DomainError> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
