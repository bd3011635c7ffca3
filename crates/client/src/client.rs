//! Mazzura backend API client.
//!
//! Every call is a single attempt against `base_url + path`: no retries and
//! no client-side timeout.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use mazzura_core::{Challenge, GeneratedOutfit, HealthStatus, OutfitRequest, Profile, WardrobeItem};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Backend API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Build` if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url().to_string(),
            }),
        })
    }

    /// The backend this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Check the backend root.
    ///
    /// # Errors
    ///
    /// Returns error if the backend is unreachable, answers with a failure
    /// status, or the body has no `message`.
    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/").await
    }

    /// List community challenges.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn challenges(&self) -> Result<Vec<Challenge>, ApiError> {
        self.get_json("/api/challenges").await
    }

    /// Create or replace a profile. Returns the backend's echo of the record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn save_profile(&self, profile: &Profile) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/profile", profile).await
    }

    /// Fetch the profile stored under `email`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails (including "not found" statuses).
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, email: &str) -> Result<Profile, ApiError> {
        self.get_json(&format!("/api/profile?email={}", urlencoding::encode(email)))
            .await
    }

    /// Add an item to its owner's wardrobe. Returns the created record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, item), fields(owner = %item.owner_email, name = %item.name))]
    pub async fn add_item(&self, item: &WardrobeItem) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/wardrobe", item).await
    }

    /// List every item owned by `email`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_wardrobe(&self, email: &str) -> Result<Vec<WardrobeItem>, ApiError> {
        self.get_json(&format!("/api/wardrobe?email={}", urlencoding::encode(email)))
            .await
    }

    /// Ask the backend to assemble an outfit.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, request), fields(email = %request.email, weather = %request.weather))]
    pub async fn generate_outfit(
        &self,
        request: &OutfitRequest,
    ) -> Result<GeneratedOutfit, ApiError> {
        self.post_json("/api/outfits/generate", request).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.connectivity(&e))?;

        self.handle_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.connectivity(&e))?;

        self.handle_response(response).await
    }

    /// Turn a response into the decoded body or an error carrying its text.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.connectivity(&e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Backend returned failure status");
            return Err(ApiError::Request {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Backend response received");

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode backend response");
            ApiError::Decode(e.to_string())
        })
    }

    fn connectivity(&self, error: &reqwest::Error) -> ApiError {
        warn!(error = %error, "Backend unreachable");
        ApiError::Connectivity {
            base_url: self.inner.base_url.clone(),
            message: error.to_string(),
        }
    }
}
