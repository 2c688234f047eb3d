//! Line identifiers and colours.

use std::fmt;

use super::DomainError;

/// A normalized line identifier (e.g. `AG`, `KJ`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Trim and uppercase the input, then validate it.
    pub fn parse_normalized(s: &str) -> Result<Self, DomainError> {
        let normalized = s.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidLineId("must not be empty"));
        }
        if normalized.chars().any(char::is_control) {
            return Err(DomainError::InvalidLineId(
                "must not contain control characters",
            ));
        }
        Ok(LineId(normalized))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line colour in `#RRGGBB` form, stored uppercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColour([u8; 7]);

impl LineColour {
    /// Colour used for interchanges and edges with no known line.
    pub const NEUTRAL: LineColour = LineColour(*b"#999999");

    /// Parse a `#RRGGBB` hex colour. Hex digits may be either case.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 7
            || bytes[0] != b'#'
            || !bytes[1..].iter().all(u8::is_ascii_hexdigit)
        {
            return Err(DomainError::InvalidColour(s.to_string()));
        }

        let mut out = [0u8; 7];
        for (dst, src) in out.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(LineColour(out))
    }

    /// Returns the colour as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, so this cannot fail.
        std::str::from_utf8(&self.0).unwrap_or("#999999")
    }
}

impl Default for LineColour {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Debug for LineColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineColour({})", self.as_str())
    }
}

impl fmt::Display for LineColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
