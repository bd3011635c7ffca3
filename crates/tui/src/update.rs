//! The single update path.
//!
//! `update` is the only function that writes [`AppState`]. It applies one
//! message and returns the commands the runtime should start. Handlers follow
//! the same sequence: validate, set the loading flag, build the payload and
//! emit a command; the matching outcome message later writes the result and
//! clears the flag whether the request succeeded or not.

use mazzura_client::ApiError;
use mazzura_core::{ItemDraft, WardrobeItem};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::form::{Field, FieldKind};
use crate::message::{Edit, Intent, ListTarget, Msg};
use crate::state::{AppState, Connectivity};

/// Commands issued once at startup: the health check and the challenge list.
/// They are independent and may complete in either order.
#[must_use]
pub fn init() -> Vec<Command> {
    vec![Command::CheckHealth, Command::LoadChallenges]
}

/// Apply `msg` to `state`.
pub fn update(state: &mut AppState, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::FocusNext => {
            state.focus = state.focus.next();
            Vec::new()
        }
        Msg::FocusPrev => {
            state.focus = state.focus.prev();
            Vec::new()
        }
        Msg::Activate => activate(state),
        Msg::Edit(field, edit) => {
            apply_edit(state, field, edit);
            Vec::new()
        }
        Msg::Cycle(field, forward) => {
            cycle(state, field, forward);
            Vec::new()
        }
        Msg::Press(field) => press(state, field),
        Msg::Scroll(down) => {
            scroll(state, down);
            Vec::new()
        }
        Msg::DismissNotification => {
            state.notifications.pop_front();
            Vec::new()
        }
        Msg::Quit => {
            state.should_quit = true;
            Vec::new()
        }

        Msg::HealthChecked(result) => {
            state.connectivity = match result {
                Ok(health) => Connectivity::Online(health.message),
                Err(e) => {
                    warn!(error = %e, "Health check failed");
                    Connectivity::Offline
                }
            };
            Vec::new()
        }
        Msg::ChallengesLoaded(result) => {
            match result {
                Ok(challenges) => {
                    state.challenges = challenges;
                    state.scroll.challenges = 0;
                }
                Err(e) => debug!(error = %e, "Challenge list unavailable"),
            }
            Vec::new()
        }
        Msg::ProfileSaved { payload, result } => {
            state.loading.profile = false;
            match result {
                Ok(_) => {
                    state.notify("Profile saved");
                    state.session_email.clone_from(&payload.email);
                    state.fetched_profile = Some(payload);
                    state.scroll.profile = 0;
                }
                Err(e) => state.notify_error(format!("Failed to save profile: {}", e.user_message())),
            }
            Vec::new()
        }
        Msg::ProfileFetched(result) => {
            state.loading.profile = false;
            match result {
                Ok(profile) => {
                    state.fetched_profile = Some(profile);
                    state.scroll.profile = 0;
                }
                Err(e) => {
                    state.notify_error(format!("Profile fetch failed: {}", e.user_message()));
                    state.fetched_profile = None;
                }
            }
            Vec::new()
        }
        Msg::ItemAdded { owner, result } => match result {
            Ok(_) => {
                info!(%owner, "Item added, refreshing wardrobe");
                // The wardrobe flag stays set until the refresh lands.
                vec![Command::RefreshWardrobe(owner)]
            }
            Err(e) => {
                state.loading.wardrobe = false;
                state.notify_error(format!("Add item failed: {}", e.user_message()));
                Vec::new()
            }
        },
        Msg::WardrobeListed(result) => {
            state.loading.wardrobe = false;
            apply_wardrobe(state, result);
            Vec::new()
        }
        Msg::WardrobeRefreshed { owner, result } => {
            state.loading.wardrobe = false;
            apply_wardrobe(state, result);
            // Reported after the refresh, whatever its outcome.
            state.item_draft = ItemDraft::reset_for(owner);
            state.notify("Item added");
            Vec::new()
        }
        Msg::OutfitGenerated(result) => {
            match result {
                Ok(outfit) => {
                    state.generated = Some(outfit);
                    state.scroll.outfit = 0;
                    state.notify("Outfit generated");
                }
                Err(e) => state.notify_error(format!("Generation failed: {}", e.user_message())),
            }
            Vec::new()
        }
    }
}

/// Enter on the focused control: press a button, step a selector, or move
/// on from a text field.
fn activate(state: &mut AppState) -> Vec<Command> {
    let field = state.focus;
    match field.kind() {
        FieldKind::Button(_) => press(state, field),
        FieldKind::Select => {
            cycle(state, field, true);
            Vec::new()
        }
        FieldKind::Text => {
            state.focus = field.next();
            Vec::new()
        }
    }
}

/// Trigger a button's action unless its loading group is busy.
fn press(state: &mut AppState, field: Field) -> Vec<Command> {
    let FieldKind::Button(intent) = field.kind() else {
        return Vec::new();
    };
    if !state.is_enabled(field) {
        debug!(?field, "Ignoring disabled control");
        return Vec::new();
    }
    handle_intent(state, intent)
}

fn scroll(state: &mut AppState, down: bool) {
    let panel = state.focus.panel();
    let last = state.list_len(panel).saturating_sub(1);
    let offset = state.scroll_mut(panel);
    *offset = if down {
        (*offset + 1).min(last)
    } else {
        offset.saturating_sub(1)
    };
}

fn apply_wardrobe(state: &mut AppState, result: Result<Vec<WardrobeItem>, ApiError>) {
    match result {
        Ok(items) => {
            state.wardrobe = items;
            state.scroll.closet = 0;
        }
        Err(e) => state.notify_error(format!("Fetch wardrobe failed: {}", e.user_message())),
    }
}

fn apply_edit(state: &mut AppState, field: Field, edit: Edit) {
    // The owner field displays the session email while empty, so editing
    // starts from what is on screen.
    if field == Field::ItemOwner && state.item_draft.owner_email.is_empty() {
        state.item_draft.owner_email.clone_from(&state.session_email);
    }

    let Some(text) = state.text_mut(field) else {
        return;
    };
    match edit {
        Edit::Insert(c) => text.push(c),
        Edit::Backspace => {
            text.pop();
        }
        Edit::Clear => text.clear(),
    }
}

fn cycle(state: &mut AppState, field: Field, forward: bool) {
    match field {
        Field::Weather => {
            let w = state.outfit_draft.weather;
            state.outfit_draft.weather = if forward { w.next() } else { w.prev() };
        }
        Field::ItemCategory => {
            let c = state.item_draft.category;
            state.item_draft.category = if forward { c.next() } else { c.prev() };
        }
        _ => {}
    }
}

fn handle_intent(state: &mut AppState, intent: Intent) -> Vec<Command> {
    match intent {
        Intent::SaveProfile => save_profile(state),
        Intent::FetchProfile => fetch_profile(state),
        Intent::AddItem => add_item(state),
        Intent::ListWardrobe(target) => {
            let owner = match target {
                ListTarget::Session => state.session_email.clone(),
                ListTarget::ItemOwner => state.resolved_owner().to_string(),
            };
            list_wardrobe(state, owner)
        }
        Intent::GenerateOutfit => generate_outfit(state),
    }
}

fn save_profile(state: &mut AppState) -> Vec<Command> {
    state.loading.profile = true;
    let payload = state.profile_draft.to_profile();
    vec![Command::SaveProfile(payload)]
}

fn fetch_profile(state: &mut AppState) -> Vec<Command> {
    if state.session_email.is_empty() {
        state.notify_error("Enter email to fetch profile");
        return Vec::new();
    }
    state.loading.profile = true;
    vec![Command::FetchProfile(state.session_email.clone())]
}

fn add_item(state: &mut AppState) -> Vec<Command> {
    let Some(item) = state.item_draft.to_item(&state.session_email) else {
        state.notify_error("Provide owner email");
        return Vec::new();
    };
    if state.item_draft.warmth_ignored() {
        state.notify("Warmth not sent: use a number from 0 to 10");
    }
    state.loading.wardrobe = true;
    vec![Command::AddItem(item)]
}

fn list_wardrobe(state: &mut AppState, owner: String) -> Vec<Command> {
    if owner.is_empty() {
        state.notify_error("Enter email to list wardrobe");
        return Vec::new();
    }
    state.loading.wardrobe = true;
    vec![Command::ListWardrobe(owner)]
}

fn generate_outfit(state: &mut AppState) -> Vec<Command> {
    if state.session_email.is_empty() {
        state.notify_error("Enter email (profile owner)");
        return Vec::new();
    }
    let request = state.outfit_draft.to_request(&state.session_email);
    vec![Command::GenerateOutfit(request)]
}
