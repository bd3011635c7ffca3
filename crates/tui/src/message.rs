//! Messages consumed by [`crate::update::update`].
//!
//! A message is either something the user did or the outcome of a command
//! the runtime executed.

use mazzura_client::ApiError;
use mazzura_core::{Challenge, GeneratedOutfit, HealthStatus, Profile, WardrobeItem};

use crate::form::Field;

/// Which email a wardrobe listing is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    /// The session email.
    Session,
    /// The closet draft's owner, falling back to the session email.
    ItemOwner,
}

/// A user action that may reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SaveProfile,
    FetchProfile,
    AddItem,
    ListWardrobe(ListTarget),
    GenerateOutfit,
}

/// An in-place edit of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug)]
pub enum Msg {
    // Input
    FocusNext,
    FocusPrev,
    /// Enter on the focused control.
    Activate,
    Edit(Field, Edit),
    /// Step a selector forward (`true`) or back.
    Cycle(Field, bool),
    /// A button pressed, whether or not it has focus. Ignored while the
    /// button is disabled.
    Press(Field),
    /// Move the list in the focused panel down (`true`) or up by one entry.
    Scroll(bool),
    DismissNotification,
    Quit,

    // Command outcomes
    HealthChecked(Result<HealthStatus, ApiError>),
    ChallengesLoaded(Result<Vec<Challenge>, ApiError>),
    ProfileSaved {
        payload: Profile,
        result: Result<serde_json::Value, ApiError>,
    },
    ProfileFetched(Result<Profile, ApiError>),
    ItemAdded {
        owner: String,
        result: Result<serde_json::Value, ApiError>,
    },
    WardrobeListed(Result<Vec<WardrobeItem>, ApiError>),
    /// The listing that follows a successful add.
    WardrobeRefreshed {
        owner: String,
        result: Result<Vec<WardrobeItem>, ApiError>,
    },
    OutfitGenerated(Result<GeneratedOutfit, ApiError>),
}
