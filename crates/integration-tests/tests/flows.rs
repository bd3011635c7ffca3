//! Key-driven flows: messages go through `update`, the commands it returns
//! run against the in-memory backend, and their outcomes go back through
//! `update` until nothing is left to do.

use mazzura_client::{ApiClient, ClientConfig};
use mazzura_core::Category;
use rust_decimal::Decimal;
use mazzura_integration_tests::{HEALTH_MESSAGE, StubBackend, settle};
use mazzura_tui::command::Command;
use mazzura_tui::form::Field;
use mazzura_tui::message::{Edit, Msg};
use mazzura_tui::state::{AppState, Connectivity, NotificationKind};
use mazzura_tui::update::{init, update};

/// Type `text` into `field` one key at a time.
fn type_into(state: &mut AppState, field: Field, text: &str) {
    for c in text.chars() {
        update(state, Msg::Edit(field, Edit::Insert(c)));
    }
}

fn notification_texts(state: &AppState) -> Vec<&str> {
    state
        .notifications
        .iter()
        .map(|n| n.text.as_str())
        .collect()
}

#[tokio::test]
async fn test_startup_online() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());

    settle(&mut state, &client, init()).await;

    assert_eq!(state.connectivity, Connectivity::Online(HEALTH_MESSAGE.to_string()));
    assert_eq!(state.status_text(), format!("✅ {HEALTH_MESSAGE}"));
    assert_eq!(state.challenges.len(), 2);
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn test_startup_offline() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let base_url = format!("http://{}", listener.local_addr().expect("no addr"));
    drop(listener);

    let client = ApiClient::new(&ClientConfig::new(&base_url).expect("bad url"))
        .expect("client build failed");
    let mut state = AppState::new(client.base_url());

    settle(&mut state, &client, init()).await;

    assert_eq!(state.connectivity, Connectivity::Offline);
    assert_eq!(
        state.status_text(),
        format!("❌ Cannot reach backend at {base_url}")
    );
    assert!(state.challenges.is_empty());
    assert!(state.notifications.is_empty(), "startup failures are silent");
}

#[tokio::test]
async fn test_save_profile_then_fetch_by_session_email() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());

    type_into(&mut state, Field::ProfileName, "Aisha");
    type_into(&mut state, Field::ProfileEmail, "a@x.com");
    type_into(&mut state, Field::PreferredColors, " black , , lilac ");

    let commands = update(&mut state, Msg::Press(Field::SaveProfileButton));
    assert!(state.loading.profile);
    settle(&mut state, &client, commands).await;

    assert!(!state.loading.profile);
    assert_eq!(notification_texts(&state), vec!["Profile saved"]);
    assert_eq!(state.session_email, "a@x.com");
    let stored = backend.stored_profile("a@x.com").expect("not stored");
    assert_eq!(stored["preferred_colors"], serde_json::json!(["black", "lilac"]));

    state.fetched_profile = None;
    let commands = update(&mut state, Msg::Press(Field::FetchProfileButton));
    settle(&mut state, &client, commands).await;

    let fetched = state.fetched_profile.as_ref().expect("profile not shown");
    assert_eq!(fetched.name, "Aisha");
    assert_eq!(fetched.preferred_colors, vec!["black", "lilac"]);
}

#[tokio::test]
async fn test_fetch_unknown_profile_reports_body() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());
    type_into(&mut state, Field::SessionEmail, "nobody@x.com");

    let commands = update(&mut state, Msg::Press(Field::FetchProfileButton));
    settle(&mut state, &client, commands).await;

    assert!(!state.loading.profile);
    assert!(state.fetched_profile.is_none());
    let note = state.current_notification().expect("no notification");
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.text, "Profile fetch failed: Profile not found");
}

#[tokio::test]
async fn test_add_item_refreshes_owner_wardrobe_once() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());

    type_into(&mut state, Field::SessionEmail, "a@x.com");
    type_into(&mut state, Field::ItemName, "Linen shirt");
    update(&mut state, Msg::Cycle(Field::ItemCategory, true));
    type_into(&mut state, Field::ItemPrice, "1299.50");
    type_into(&mut state, Field::ItemWarmth, "42");
    type_into(&mut state, Field::ItemTags, "summer, ,linen");

    let commands = update(&mut state, Msg::Press(Field::AddItemButton));
    assert!(state.loading.wardrobe);
    let ran = settle(&mut state, &client, commands).await;

    assert_eq!(ran, vec!["add_item", "refresh_wardrobe"]);
    assert_eq!(backend.count("POST /api/wardrobe"), 1);
    assert_eq!(backend.count("GET /api/wardrobe"), 1);
    assert_eq!(backend.listed_for(), vec!["a@x.com".to_string()]);

    assert!(!state.loading.wardrobe);
    assert_eq!(
        notification_texts(&state),
        vec!["Warmth not sent: use a number from 0 to 10", "Item added"]
    );
    assert_eq!(state.wardrobe.len(), 1);
    let item = &state.wardrobe[0];
    assert_eq!(item.name, "Linen shirt");
    assert_eq!(item.category, Category::Bottom);
    assert_eq!(item.tags, vec!["summer", "linen"]);
    assert_eq!(item.price, Some(Decimal::new(12995, 1)));
    assert_eq!(item.warmth, None, "out-of-range warmth is omitted");

    // The draft is reset but keeps the owner
    assert_eq!(state.item_draft.owner_email, "a@x.com");
    assert!(state.item_draft.name.is_empty());
    assert_eq!(state.item_draft.category, Category::Top);
}

#[tokio::test]
async fn test_add_item_without_owner_sends_nothing() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());
    type_into(&mut state, Field::ItemName, "Linen shirt");

    let commands = update(&mut state, Msg::Press(Field::AddItemButton));
    assert!(commands.is_empty());
    settle(&mut state, &client, commands).await;

    assert!(backend.requests().is_empty());
    assert!(!state.loading.wardrobe);
    assert_eq!(notification_texts(&state), vec!["Provide owner email"]);
}

#[tokio::test]
async fn test_view_wardrobe_uses_item_owner() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());
    type_into(&mut state, Field::SessionEmail, "a@x.com");
    type_into(&mut state, Field::ItemOwner, ".uk");

    // Editing the owner field starts from the displayed session email
    assert_eq!(state.item_draft.owner_email, "a@x.com.uk");

    update(&mut state, Msg::Edit(Field::ItemOwner, Edit::Clear));
    type_into(&mut state, Field::ItemOwner, "b@x.com");
    let commands = update(&mut state, Msg::Press(Field::ViewWardrobeButton));
    settle(&mut state, &client, commands).await;

    assert_eq!(backend.listed_for(), vec!["b@x.com".to_string()]);
    assert!(state.wardrobe.is_empty());
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn test_generate_outfit_flow() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());

    let commands = update(&mut state, Msg::Press(Field::GenerateButton));
    assert!(commands.is_empty());
    assert_eq!(notification_texts(&state), vec!["Enter email (profile owner)"]);
    update(&mut state, Msg::DismissNotification);

    type_into(&mut state, Field::SessionEmail, "a@x.com");
    type_into(&mut state, Field::Mood, "bold");
    type_into(&mut state, Field::Event, "garba");
    let commands = update(&mut state, Msg::Press(Field::GenerateButton));
    settle(&mut state, &client, commands).await;

    let outfit = state.generated.as_ref().expect("no outfit");
    assert_eq!(outfit.title, "bold look for garba");
    assert!(outfit.items.is_empty());
    assert_eq!(notification_texts(&state), vec!["Outfit generated"]);
}

#[tokio::test]
async fn test_backend_failure_clears_flags() {
    let backend = StubBackend::spawn().await;
    backend.fail_with(axum::http::StatusCode::SERVICE_UNAVAILABLE, "maintenance");
    let client = backend.client();
    let mut state = AppState::new(client.base_url());
    type_into(&mut state, Field::SessionEmail, "a@x.com");
    type_into(&mut state, Field::ProfileEmail, "a@x.com");

    let mut commands = update(&mut state, Msg::Press(Field::SaveProfileButton));
    commands.extend(update(&mut state, Msg::Press(Field::AddItemButton)));
    commands.extend(update(&mut state, Msg::Press(Field::GenerateButton)));
    assert!(state.loading.profile && state.loading.wardrobe);

    settle(&mut state, &client, commands).await;

    assert!(!state.loading.profile);
    assert!(!state.loading.wardrobe);
    assert_eq!(
        notification_texts(&state),
        vec![
            "Failed to save profile: maintenance",
            "Add item failed: maintenance",
            "Generation failed: maintenance",
        ]
    );
    assert!(state.notifications.iter().all(|n| n.kind == NotificationKind::Error));
}

#[tokio::test]
async fn test_refresh_failure_after_add_reported_first() {
    let backend = StubBackend::spawn().await;
    let client = backend.client();
    let mut state = AppState::new(client.base_url());
    type_into(&mut state, Field::SessionEmail, "a@x.com");
    type_into(&mut state, Field::ItemName, "Linen shirt");

    let commands = update(&mut state, Msg::Press(Field::AddItemButton));
    let Some(add @ Command::AddItem(_)) = commands.into_iter().next() else {
        panic!("expected add_item");
    };
    let msg = add.execute(&client).await;
    let refresh = update(&mut state, msg);
    assert!(state.notifications.is_empty(), "nothing reported before the refresh");

    backend.fail_with(axum::http::StatusCode::SERVICE_UNAVAILABLE, "maintenance");
    settle(&mut state, &client, refresh).await;

    assert!(!state.loading.wardrobe);
    assert_eq!(
        notification_texts(&state),
        vec!["Fetch wardrobe failed: maintenance", "Item added"]
    );
    assert!(state.item_draft.name.is_empty());
}
