//! The state container.
//!
//! Every slice the view reads lives here. Only [`crate::update::update`]
//! writes to it.

use std::collections::VecDeque;

use mazzura_core::{
    Challenge, GeneratedOutfit, ItemDraft, OutfitDraft, Profile, ProfileDraft, WardrobeItem,
};

use crate::form::{Field, LoadingGroup, Panel};

/// Result of the startup health check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Checking,
    Online(String),
    Offline,
}

/// In-flight flags, one per loading group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    pub profile: bool,
    pub wardrobe: bool,
}

impl Loading {
    #[must_use]
    pub const fn is_set(self, group: LoadingGroup) -> bool {
        match group {
            LoadingGroup::Profile => self.profile,
            LoadingGroup::Wardrobe => self.wardrobe,
        }
    }
}

/// First visible entry of each scrollable list.
///
/// Offsets count entries (challenges, cards, outfit pieces, profile JSON
/// lines), not screen rows, so they stay valid when the terminal resizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    pub challenges: usize,
    pub outfit: usize,
    pub profile: usize,
    pub closet: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Backend the client talks to, shown in the offline status.
    pub base_url: String,
    pub connectivity: Connectivity,

    // Draft state
    pub session_email: String,
    pub profile_draft: ProfileDraft,
    pub item_draft: ItemDraft,
    pub outfit_draft: OutfitDraft,

    // Display state
    pub fetched_profile: Option<Profile>,
    pub wardrobe: Vec<WardrobeItem>,
    pub generated: Option<GeneratedOutfit>,
    pub challenges: Vec<Challenge>,

    pub loading: Loading,
    pub scroll: Scroll,
    /// Oldest first; the view shows the front one.
    pub notifications: VecDeque<Notification>,
    pub focus: Field,
    pub should_quit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Header status line.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.connectivity {
            Connectivity::Checking => "Checking backend...".to_string(),
            Connectivity::Online(message) => format!("✅ {message}"),
            Connectivity::Offline => format!("❌ Cannot reach backend at {}", self.base_url),
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.push_notification(NotificationKind::Info, text.into());
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.push_notification(NotificationKind::Error, text.into());
    }

    fn push_notification(&mut self, kind: NotificationKind, text: String) {
        tracing::debug!(?kind, %text, "notification");
        self.notifications.push_back(Notification { kind, text });
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    /// The owner a new item or "View Wardrobe" would use.
    #[must_use]
    pub fn resolved_owner(&self) -> &str {
        self.item_draft.resolved_owner(&self.session_email)
    }

    /// Fetched profile as the pretty JSON the profile panel shows.
    #[must_use]
    pub fn fetched_profile_lines(&self) -> Vec<String> {
        self.fetched_profile
            .as_ref()
            .and_then(|profile| serde_json::to_string_pretty(profile).ok())
            .map(|json| json.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Number of entries in the list shown by `panel`.
    ///
    /// The email panel has no list of its own; it scrolls the challenges
    /// beside it.
    #[must_use]
    pub fn list_len(&self, panel: Panel) -> usize {
        match panel {
            Panel::Email => self.challenges.len(),
            Panel::Outfit => self.generated.as_ref().map_or(0, |o| o.items.len()),
            Panel::Profile => self.fetched_profile_lines().len(),
            Panel::Closet => self.wardrobe.len(),
        }
    }

    pub fn scroll_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Email => &mut self.scroll.challenges,
            Panel::Outfit => &mut self.scroll.outfit,
            Panel::Profile => &mut self.scroll.profile,
            Panel::Closet => &mut self.scroll.closet,
        }
    }

    /// Whether a control accepts activation right now.
    #[must_use]
    pub fn is_enabled(&self, field: Field) -> bool {
        field
            .loading_group()
            .is_none_or(|group| !self.loading.is_set(group))
    }

    /// Current text of a field, as displayed.
    ///
    /// The owner field shows the session email while its draft is empty.
    #[must_use]
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::ItemOwner => self.resolved_owner().to_string(),
            Field::Weather => self.outfit_draft.weather.label().to_string(),
            Field::ItemCategory => self.item_draft.category.as_str().to_string(),
            other => self.text_ref(other).cloned().unwrap_or_default(),
        }
    }

    fn text_ref(&self, field: Field) -> Option<&String> {
        let text = match field {
            Field::SessionEmail => &self.session_email,
            Field::Mood => &self.outfit_draft.mood,
            Field::Event => &self.outfit_draft.event,
            Field::ProfileName => &self.profile_draft.name,
            Field::ProfileEmail => &self.profile_draft.email,
            Field::BodyType => &self.profile_draft.body_type,
            Field::SkinTone => &self.profile_draft.skin_tone,
            Field::PreferredColors => &self.profile_draft.preferred_colors,
            Field::Vibe => &self.profile_draft.vibe,
            Field::Location => &self.profile_draft.location,
            Field::ItemOwner => &self.item_draft.owner_email,
            Field::ItemName => &self.item_draft.name,
            Field::ItemColor => &self.item_draft.color,
            Field::ItemSize => &self.item_draft.size,
            Field::ItemBrand => &self.item_draft.brand,
            Field::ItemPrice => &self.item_draft.price,
            Field::ItemTags => &self.item_draft.tags,
            Field::ItemWarmth => &self.item_draft.warmth,
            Field::ItemImageUrl => &self.item_draft.image_url,
            _ => return None,
        };
        Some(text)
    }

    /// Mutable access to the draft string behind a text field.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let text = match field {
            Field::SessionEmail => &mut self.session_email,
            Field::Mood => &mut self.outfit_draft.mood,
            Field::Event => &mut self.outfit_draft.event,
            Field::ProfileName => &mut self.profile_draft.name,
            Field::ProfileEmail => &mut self.profile_draft.email,
            Field::BodyType => &mut self.profile_draft.body_type,
            Field::SkinTone => &mut self.profile_draft.skin_tone,
            Field::PreferredColors => &mut self.profile_draft.preferred_colors,
            Field::Vibe => &mut self.profile_draft.vibe,
            Field::Location => &mut self.profile_draft.location,
            Field::ItemOwner => &mut self.item_draft.owner_email,
            Field::ItemName => &mut self.item_draft.name,
            Field::ItemColor => &mut self.item_draft.color,
            Field::ItemSize => &mut self.item_draft.size,
            Field::ItemBrand => &mut self.item_draft.brand,
            Field::ItemPrice => &mut self.item_draft.price,
            Field::ItemTags => &mut self.item_draft.tags,
            Field::ItemWarmth => &mut self.item_draft.warmth,
            Field::ItemImageUrl => &mut self.item_draft.image_url,
            _ => return None,
        };
        Some(text)
    }
}
