//! Outfit generation request and result.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::status::Weather;

/// Body of `POST /api/outfits/generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub email: String,
    pub mood: String,
    pub weather: Weather,
    pub event: String,
}

/// An outfit suggested by the backend. Replaced wholesale on every generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedOutfit {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<OutfitPiece>,
}

/// One line of a generated outfit.
///
/// `category` is free text here: the generator may describe pieces the
/// wardrobe categories do not cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitPiece {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
}

impl OutfitPiece {
    /// `category: name · color · brand`, leaving out empty color or brand.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!("{}: {}", self.category, self.name);
        for extra in [&self.color, &self.brand] {
            if !extra.is_empty() {
                line.push_str(" · ");
                line.push_str(extra);
            }
        }
        line
    }
}
