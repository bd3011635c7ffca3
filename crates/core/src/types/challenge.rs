//! Community challenges and the backend health message.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A community styling challenge, shown read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenge {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reward_points: u32,
}

/// Body of the root health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_challenge_list() {
        let list: Vec<Challenge> = serde_json::from_value(json!([
            {"title": "Monsoon Monochrome", "prompt": "One color, three textures", "reward_points": 50},
            {"title": "Thrift Flip", "prompt": "Restyle a thrifted piece"}
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].reward_points, 50);
        assert_eq!(list[1].reward_points, 0);
    }

    #[test]
    fn test_health_requires_message() {
        assert!(serde_json::from_value::<HealthStatus>(json!({"status": "ok"})).is_err());
        let ok: HealthStatus = serde_json::from_value(json!({"message": "Mazzura API up"})).unwrap();
        assert_eq!(ok.message, "Mazzura API up");
    }
}
