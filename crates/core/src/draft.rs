//! Form drafts and their draft-to-payload transforms.
//!
//! A draft holds exactly what the user typed. Nothing is validated at
//! keystroke time; coercion happens once, when a payload is built.

use crate::parse::{parse_price, parse_warmth, split_list};
use crate::types::{Category, OutfitRequest, Profile, WardrobeItem, Weather};

/// Editable profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub body_type: String,
    pub skin_tone: String,
    /// Comma-separated.
    pub preferred_colors: String,
    pub vibe: String,
    pub location: String,
}

impl ProfileDraft {
    /// Build the `POST /api/profile` body.
    #[must_use]
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            body_type: self.body_type.clone(),
            skin_tone: self.skin_tone.clone(),
            preferred_colors: split_list(&self.preferred_colors),
            vibe: self.vibe.clone(),
            location: self.location.clone(),
        }
    }
}

/// Editable wardrobe item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    /// Empty means "use the session email".
    pub owner_email: String,
    pub name: String,
    pub category: Category,
    pub color: String,
    pub size: String,
    pub image_url: String,
    pub brand: String,
    pub price: String,
    /// Comma-separated.
    pub tags: String,
    pub warmth: String,
}

impl ItemDraft {
    /// The owner this draft would be filed under.
    #[must_use]
    pub fn resolved_owner<'a>(&'a self, session_email: &'a str) -> &'a str {
        if self.owner_email.is_empty() {
            session_email
        } else {
            &self.owner_email
        }
    }

    /// Build the `POST /api/wardrobe` body.
    ///
    /// Returns `None` when neither the draft nor the session names an owner.
    #[must_use]
    pub fn to_item(&self, session_email: &str) -> Option<WardrobeItem> {
        let owner = self.resolved_owner(session_email);
        if owner.is_empty() {
            return None;
        }

        Some(WardrobeItem {
            id: None,
            owner_email: owner.to_owned(),
            name: self.name.clone(),
            category: self.category,
            color: self.color.clone(),
            size: self.size.clone(),
            image_url: self.image_url.clone(),
            brand: self.brand.clone(),
            price: parse_price(&self.price),
            tags: split_list(&self.tags),
            warmth: parse_warmth(&self.warmth),
        })
    }

    /// Whether warmth text was entered but will be left out of the payload
    /// because it is not a number on the 0-10 scale.
    #[must_use]
    pub fn warmth_ignored(&self) -> bool {
        !self.warmth.trim().is_empty() && parse_warmth(&self.warmth).is_none()
    }

    /// A blank draft that keeps the given owner.
    #[must_use]
    pub fn reset_for(owner_email: impl Into<String>) -> Self {
        Self {
            owner_email: owner_email.into(),
            ..Self::default()
        }
    }
}

/// Editable outfit-generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitDraft {
    pub mood: String,
    pub weather: Weather,
    pub event: String,
}

impl OutfitDraft {
    /// Merge the session email into a generation request.
    #[must_use]
    pub fn to_request(&self, email: &str) -> OutfitRequest {
        OutfitRequest {
            email: email.to_owned(),
            mood: self.mood.clone(),
            weather: self.weather,
            event: self.event.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_profile_colors_split() {
        let draft = ProfileDraft {
            email: "aisha@mazzura.app".to_string(),
            preferred_colors: "black, lilac , sage".to_string(),
            ..Default::default()
        };
        let profile = draft.to_profile();
        assert_eq!(profile.preferred_colors, vec!["black", "lilac", "sage"]);
        assert_eq!(profile.email, "aisha@mazzura.app");
    }

    #[test]
    fn test_profile_empty_colors_is_empty_list() {
        assert!(ProfileDraft::default().to_profile().preferred_colors.is_empty());
    }

    #[test]
    fn test_item_defaults_owner_to_session() {
        let draft = ItemDraft {
            name: "Tee".to_string(),
            category: Category::Top,
            tags: "red, blue".to_string(),
            ..Default::default()
        };
        let item = draft.to_item("a@x.com").unwrap();
        assert_eq!(item.owner_email, "a@x.com");
        assert_eq!(item.tags, vec!["red", "blue"]);
        assert_eq!(item.category, Category::Top);
    }

    #[test]
    fn test_item_explicit_owner_wins() {
        let draft = ItemDraft {
            owner_email: "b@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.to_item("a@x.com").unwrap().owner_email, "b@x.com");
    }

    #[test]
    fn test_item_without_any_owner() {
        assert!(ItemDraft::default().to_item("").is_none());
    }

    #[test]
    fn test_item_empty_numbers_are_unset() {
        let item = ItemDraft::default().to_item("a@x.com").unwrap();
        assert_eq!(item.price, None);
        assert_eq!(item.warmth, None);

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("price").is_none());
        assert!(json.get("warmth").is_none());
    }

    #[test]
    fn test_item_numbers_parsed() {
        let draft = ItemDraft {
            price: "1299".to_string(),
            warmth: "3".to_string(),
            ..Default::default()
        };
        let item = draft.to_item("a@x.com").unwrap();
        assert_eq!(item.price, Some(Decimal::from(1299)));
        assert_eq!(item.warmth, Some(3.0));
    }

    #[test]
    fn test_warmth_ignored_only_for_unusable_text() {
        let with = |warmth: &str| ItemDraft {
            warmth: warmth.to_string(),
            ..Default::default()
        };
        assert!(!with("").warmth_ignored());
        assert!(!with("  ").warmth_ignored());
        assert!(!with("10").warmth_ignored());
        assert!(with("42").warmth_ignored());
        assert!(with("-1").warmth_ignored());
        assert!(with("warm").warmth_ignored());
    }

    #[test]
    fn test_reset_keeps_owner_only() {
        let reset = ItemDraft::reset_for("a@x.com");
        assert_eq!(reset.owner_email, "a@x.com");
        assert!(reset.name.is_empty());
        assert_eq!(reset.category, Category::Top);
    }

    #[test]
    fn test_outfit_request_merges_email() {
        let draft = OutfitDraft {
            mood: "bold".to_string(),
            weather: Weather::Rainy,
            event: "garba".to_string(),
        };
        let req = draft.to_request("a@x.com");
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.weather, Weather::Rainy);
        assert_eq!(req.event, "garba");
    }
}
