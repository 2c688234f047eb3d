//! Domain error types.
//!
//! These errors represent validation failures for network identifiers.
//! They are distinct from loading and HTTP errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station identifier failed validation
    #[error("invalid station id: {0}")]
    InvalidStationId(&'static str),

    /// Line identifier failed validation
    #[error("invalid line id: {0}")]
    InvalidLineId(&'static str),

    /// Colour is not a `#RRGGBB` hex string
    #[error("invalid line colour {0:?}: expected #RRGGBB")]
    InvalidColour(String),

    /// Connection type other than ride or interchange
    #[error("unknown connection type {0:?}")]
    UnknownConnectionType(String),
}
