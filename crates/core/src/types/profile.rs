//! Style profile ("fashion DNA").

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A user's style profile, keyed by email.
///
/// Every text field may be empty; the backend decides what it requires.
/// Fields the backend adds (ids, timestamps) are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_tone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_colors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub vibe: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
}
