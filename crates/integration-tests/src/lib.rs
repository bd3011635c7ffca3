//! Integration tests for Mazzura.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mazzura-integration-tests
//! ```
//!
//! No external services are needed: [`StubBackend`] serves the backend's
//! HTTP surface from memory on an ephemeral port.
//!
//! # Test Categories
//!
//! - `client_endpoints` - `ApiClient` against each route
//! - `flows` - key-driven flows through `update` and real requests

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use mazzura_client::{ApiClient, ClientConfig};
use mazzura_tui::command::Command;
use mazzura_tui::state::AppState;
use mazzura_tui::update::update;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Message returned by `GET /`.
pub const HEALTH_MESSAGE: &str = "Mazzura API running";

#[derive(Default)]
struct Store {
    profiles: HashMap<String, Value>,
    wardrobe: Vec<Value>,
    next_id: u64,
    /// `METHOD /path` for every request, in arrival order.
    requests: Vec<String>,
    /// Owners passed to `GET /api/wardrobe`, decoded.
    listed_for: Vec<String>,
    failure: Option<(StatusCode, String)>,
}

#[derive(Clone, Default)]
struct StubState {
    store: Arc<Mutex<Store>>,
}

impl StubState {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory backend bound to `127.0.0.1` on a free port.
pub struct StubBackend {
    base_url: String,
    state: StubState,
}

impl StubBackend {
    /// Bind, start serving in the background and return.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        let state = StubState::default();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener
            .local_addr()
            .expect("Stub backend has no local address");

        let app = router(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A client pointed at this backend.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        let config = ClientConfig::new(&self.base_url).expect("Stub URL is valid");
        ApiClient::new(&config).expect("Failed to build client")
    }

    /// Answer every later request with `status` and `body`.
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        self.state.lock().failure = Some((status, body.to_string()));
    }

    /// `METHOD /path` for every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().requests.clone()
    }

    /// Number of requests received for `METHOD /path`.
    #[must_use]
    pub fn count(&self, request: &str) -> usize {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|r| *r == request)
            .count()
    }

    /// Owners the wardrobe was listed for.
    #[must_use]
    pub fn listed_for(&self) -> Vec<String> {
        self.state.lock().listed_for.clone()
    }

    /// Stored profile for `email`, as the backend saw it.
    #[must_use]
    pub fn stored_profile(&self, email: &str) -> Option<Value> {
        self.state.lock().profiles.get(email).cloned()
    }
}

/// Run `commands` and every follow-up they cause until nothing is left.
///
/// Commands run one at a time, so the outcome order is the issue order.
/// Returns the names of the commands executed.
pub async fn settle(state: &mut AppState, client: &ApiClient, commands: Vec<Command>) -> Vec<String> {
    let mut queue: VecDeque<Command> = commands.into();
    let mut ran = Vec::new();
    while let Some(command) = queue.pop_front() {
        ran.push(command.name().to_string());
        let msg = command.execute(client).await;
        queue.extend(update(state, msg));
    }
    ran
}

// =============================================================================
// Routes
// =============================================================================

fn router(state: StubState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/challenges", get(challenges))
        .route("/api/profile", post(save_profile).get(fetch_profile))
        .route("/api/wardrobe", post(add_item).get(list_wardrobe))
        .route("/api/outfits/generate", post(generate_outfit))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<StubState>, req: Request, next: Next) -> Response {
    let failure = {
        let mut store = state.lock();
        store
            .requests
            .push(format!("{} {}", req.method(), req.uri().path()));
        store.failure.clone()
    };
    match failure {
        Some((status, body)) => (status, body).into_response(),
        None => next.run(req).await,
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

#[derive(Deserialize)]
struct EmailQuery {
    #[serde(default)]
    email: String,
}

async fn health() -> Json<Value> {
    Json(json!({ "message": HEALTH_MESSAGE }))
}

async fn challenges() -> Json<Value> {
    Json(json!([
        {
            "title": "Thrift Flip",
            "prompt": "Restyle one thrifted piece three ways",
            "reward_points": 40
        },
        {
            "title": "Monochrome Monday",
            "prompt": "One colour, head to toe",
            "reward_points": 25
        }
    ]))
}

async fn save_profile(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let email = str_field(&body, "email").to_string();
    if email.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "email is required".to_string()));
    }
    state.lock().profiles.insert(email, body.clone());
    Ok(Json(json!({ "status": "saved", "profile": body })))
}

async fn fetch_profile(
    State(state): State<StubState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state
        .lock()
        .profiles
        .get(&query.email)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Profile not found".to_string()))
}

async fn add_item(State(state): State<StubState>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut store = state.lock();
    store.next_id += 1;
    if let Some(fields) = body.as_object_mut() {
        fields.insert("id".to_string(), json!(store.next_id));
    }
    store.wardrobe.push(body.clone());
    Json(body)
}

async fn list_wardrobe(
    State(state): State<StubState>,
    Query(query): Query<EmailQuery>,
) -> Json<Value> {
    let mut store = state.lock();
    store.listed_for.push(query.email.clone());
    let items: Vec<Value> = store
        .wardrobe
        .iter()
        .filter(|item| str_field(item, "owner_email") == query.email)
        .cloned()
        .collect();
    Json(Value::Array(items))
}

async fn generate_outfit(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    let email = str_field(&body, "email");
    let mood = str_field(&body, "mood");
    let event = str_field(&body, "event");

    let items: Vec<Value> = state
        .lock()
        .wardrobe
        .iter()
        .filter(|item| str_field(item, "owner_email") == email)
        .map(|item| {
            json!({
                "category": str_field(item, "category"),
                "name": str_field(item, "name"),
                "color": str_field(item, "color"),
                "brand": str_field(item, "brand"),
            })
        })
        .collect();

    Json(json!({
        "title": format!("{mood} look for {event}").trim().to_string(),
        "items": items,
    }))
}
