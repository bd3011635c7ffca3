//! Server-assigned identifiers.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier the backend assigns to a stored wardrobe item.
///
/// The backend may emit either a string (document stores) or an integer
/// (relational stores). Both are accepted and kept as text so the client never
/// has to care which one it got.
///
/// ```
/// use mazzura_core::ItemId;
///
/// let from_text: ItemId = serde_json::from_str("\"65f1c0ffee\"").unwrap();
/// let from_number: ItemId = serde_json::from_str("42").unwrap();
/// assert_eq!(from_text.as_str(), "65f1c0ffee");
/// assert_eq!(from_number.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string() {
        let id: ItemId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id, ItemId::new("abc123"));
    }

    #[test]
    fn test_deserialize_integer() {
        let id: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(id.as_str(), "7");
    }

    #[test]
    fn test_deserialize_rejects_object() {
        assert!(serde_json::from_str::<ItemId>("{}").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ItemId::new("9")).unwrap();
        assert_eq!(json, "\"9\"");
    }
}
