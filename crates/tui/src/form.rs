//! Focusable controls of the single view.
//!
//! Focus moves through [`Field::ALL`] in reading order: the three top panels
//! left to right, then the profile and closet panels.

use crate::message::{Intent, ListTarget};

/// What a control does when it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited in place.
    Text,
    /// Fixed choices, cycled with Left/Right.
    Select,
    /// Triggers an action on Enter.
    Button(Intent),
}

/// Loading group a button belongs to; its button is disabled while the
/// group's flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingGroup {
    Profile,
    Wardrobe,
}

/// Bordered panel a control is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Email,
    Outfit,
    Profile,
    Closet,
}

/// Every focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    // Your Email
    #[default]
    SessionEmail,
    FetchProfileButton,
    LoadWardrobeButton,
    // Generate Outfit
    Mood,
    Weather,
    Event,
    GenerateButton,
    // Build Your Fashion DNA
    ProfileName,
    ProfileEmail,
    BodyType,
    SkinTone,
    PreferredColors,
    Vibe,
    Location,
    SaveProfileButton,
    FetchByEmailButton,
    // Smart Closet
    ItemOwner,
    ItemName,
    ItemCategory,
    ItemColor,
    ItemSize,
    ItemBrand,
    ItemPrice,
    ItemTags,
    ItemWarmth,
    ItemImageUrl,
    AddItemButton,
    ViewWardrobeButton,
}

impl Field {
    /// Focus order.
    pub const ALL: [Self; 28] = [
        Self::SessionEmail,
        Self::FetchProfileButton,
        Self::LoadWardrobeButton,
        Self::Mood,
        Self::Weather,
        Self::Event,
        Self::GenerateButton,
        Self::ProfileName,
        Self::ProfileEmail,
        Self::BodyType,
        Self::SkinTone,
        Self::PreferredColors,
        Self::Vibe,
        Self::Location,
        Self::SaveProfileButton,
        Self::FetchByEmailButton,
        Self::ItemOwner,
        Self::ItemName,
        Self::ItemCategory,
        Self::ItemColor,
        Self::ItemSize,
        Self::ItemBrand,
        Self::ItemPrice,
        Self::ItemTags,
        Self::ItemWarmth,
        Self::ItemImageUrl,
        Self::AddItemButton,
        Self::ViewWardrobeButton,
    ];

    #[must_use]
    pub fn next(self) -> Self {
        self.offset(1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.offset(Self::ALL.len() - 1)
    }

    fn offset(self, step: usize) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL
            .get((pos + step) % Self::ALL.len())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::FetchProfileButton | Self::FetchByEmailButton => {
                FieldKind::Button(Intent::FetchProfile)
            }
            Self::LoadWardrobeButton => FieldKind::Button(Intent::ListWardrobe(ListTarget::Session)),
            Self::ViewWardrobeButton => {
                FieldKind::Button(Intent::ListWardrobe(ListTarget::ItemOwner))
            }
            Self::GenerateButton => FieldKind::Button(Intent::GenerateOutfit),
            Self::SaveProfileButton => FieldKind::Button(Intent::SaveProfile),
            Self::AddItemButton => FieldKind::Button(Intent::AddItem),
            Self::Weather | Self::ItemCategory => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    #[must_use]
    pub const fn panel(self) -> Panel {
        match self {
            Self::SessionEmail | Self::FetchProfileButton | Self::LoadWardrobeButton => Panel::Email,
            Self::Mood | Self::Weather | Self::Event | Self::GenerateButton => Panel::Outfit,
            Self::ProfileName
            | Self::ProfileEmail
            | Self::BodyType
            | Self::SkinTone
            | Self::PreferredColors
            | Self::Vibe
            | Self::Location
            | Self::SaveProfileButton
            | Self::FetchByEmailButton => Panel::Profile,
            _ => Panel::Closet,
        }
    }

    /// Group whose loading flag disables this control.
    ///
    /// Only the buttons inside the profile and closet panels are gated; the
    /// shortcuts in the email panel stay live.
    #[must_use]
    pub const fn loading_group(self) -> Option<LoadingGroup> {
        match self {
            Self::SaveProfileButton | Self::FetchByEmailButton => Some(LoadingGroup::Profile),
            Self::AddItemButton | Self::ViewWardrobeButton => Some(LoadingGroup::Wardrobe),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SessionEmail | Self::ProfileEmail => "Email",
            Self::FetchProfileButton => "Fetch Profile",
            Self::LoadWardrobeButton => "Load Wardrobe",
            Self::Mood => "Mood",
            Self::Weather => "Weather",
            Self::Event => "Event",
            Self::GenerateButton => "Generate",
            Self::ProfileName => "Name",
            Self::BodyType => "Body Type",
            Self::SkinTone => "Skin Tone",
            Self::PreferredColors => "Preferred Colors (comma)",
            Self::Vibe => "Vibe",
            Self::Location => "Location",
            Self::SaveProfileButton => "Save Profile",
            Self::FetchByEmailButton => "Fetch by Email",
            Self::ItemOwner => "Owner Email",
            Self::ItemName => "Item Name",
            Self::ItemCategory => "Category",
            Self::ItemColor => "Color",
            Self::ItemSize => "Size",
            Self::ItemBrand => "Brand",
            Self::ItemPrice => "Price",
            Self::ItemTags => "Tags (comma)",
            Self::ItemWarmth => "Warmth (0-10)",
            Self::ItemImageUrl => "Image URL (optional)",
            Self::AddItemButton => "Add Item",
            Self::ViewWardrobeButton => "View Wardrobe",
        }
    }

    /// Hint shown while a text field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::SessionEmail | Self::ProfileEmail | Self::ItemOwner => "you@mazzura.app",
            Self::Mood => "cozy, bold, minimal",
            Self::Event => "brunch, office, garba",
            Self::ProfileName => "Aisha Rao",
            Self::BodyType => "pear, athletic, curvy",
            Self::SkinTone => "warm, cool, neutral",
            Self::PreferredColors => "black, lilac, sage",
            Self::Vibe => "soft, bold, minimal",
            Self::Location => "Bengaluru, IN",
            Self::ItemName => "Oversized tee",
            Self::ItemColor => "black",
            Self::ItemSize => "M",
            Self::ItemBrand => "Local craft",
            Self::ItemPrice => "1299",
            Self::ItemTags => "street, monochrome",
            Self::ItemWarmth => "0-10, other values are not sent",
            Self::ItemImageUrl => "https://...",
            _ => "",
        }
    }
}
