//! Domain types for the transit route server.
//!
//! This module contains the validated value types that the rest of the
//! crate passes around. All types enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod connection;
mod error;
mod line;
mod station;

pub use connection::ConnectionType;
pub use error::DomainError;
pub use line::{LineColour, LineId};
pub use station::StationId;
