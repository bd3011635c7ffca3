//! Core types for Mazzura.
//!
//! This module provides the records exchanged with the backend API.

use serde::{Deserialize, Deserializer};

pub mod challenge;
pub mod id;
pub mod outfit;
pub mod profile;
pub mod status;
pub mod wardrobe;

pub use challenge::{Challenge, HealthStatus};
pub use id::ItemId;
pub use outfit::{GeneratedOutfit, OutfitPiece, OutfitRequest};
pub use profile::Profile;
pub use status::*;
pub use wardrobe::WardrobeItem;

/// Decode `null` as the type's default.
///
/// The backend emits `null` for optional text it never received.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
