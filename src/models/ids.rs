//! Strongly-typed transaction identifier
//!
//! Identifiers are random UUID v4 values, so ids generated in separate
//! sessions or imported from different files do not collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form used in terminal output ("txn-" + first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Parse an ID from a full UUID string, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert!(!a.as_uuid().is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_display() {
        let id = TransactionId::new();
        let short = id.short();
        assert!(short.starts_with("txn-"));
        assert_eq!(short.len(), 12);
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain = TransactionId::parse(uuid_str).unwrap();
        let prefixed: TransactionId = format!("txn-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.to_string(), uuid_str);
    }

    #[test]
    fn test_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
