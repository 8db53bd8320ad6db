use crate::error::{McsError, McsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Object identifier as carried in T.125 connect PDUs
///
/// PER transmits exactly six logical components: the first two share one
/// byte (high and low nibble) and the remaining four travel as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    components: [u8; 6],
}

impl ObjectIdentifier {
    /// Number of logical components
    pub const COMPONENTS: usize = 6;

    /// Create an object identifier from its six components
    pub const fn new(components: [u8; 6]) -> Self {
        Self { components }
    }

    /// Parse an object identifier from dot format, e.g. "0.0.20.124.0.1"
    pub fn from_string(s: &str) -> McsResult<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != Self::COMPONENTS {
            return Err(McsError::InvalidData(format!(
                "Expected {} dot-separated values, got {}",
                Self::COMPONENTS,
                parts.len()
            )));
        }

        let mut components = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u8>()
                .map_err(|_| McsError::InvalidData(format!("Invalid component value: {}", part)))?;
        }

        Ok(Self { components })
    }

    /// Get the components as a byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.components
    }

    /// Get a single component
    pub fn component(&self, index: usize) -> Option<u8> {
        self.components.get(index).copied()
    }
}

impl From<[u8; 6]> for ObjectIdentifier {
    fn from(components: [u8; 6]) -> Self {
        Self::new(components)
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.components;
        write!(f, "{}.{}.{}.{}.{}.{}", a, b, c, d, e, g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_identifier_from_string() {
        let oid = ObjectIdentifier::from_string("0.0.20.124.0.1").unwrap();
        assert_eq!(oid, ObjectIdentifier::new([0, 0, 20, 124, 0, 1]));
        assert_eq!(oid.component(3), Some(124));
        assert_eq!(oid.component(6), None);
    }

    #[test]
    fn test_object_identifier_rejects_bad_input() {
        assert!(ObjectIdentifier::from_string("0.0.20.124.0").is_err());
        assert!(ObjectIdentifier::from_string("0.0.20.124.0.256").is_err());
    }

    #[test]
    fn test_object_identifier_display() {
        let oid = ObjectIdentifier::new([0, 0, 20, 124, 0, 1]);
        assert_eq!(oid.to_string(), "0.0.20.124.0.1");
    }
}
