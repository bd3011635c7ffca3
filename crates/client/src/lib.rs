//! Mazzura Client - Backend API access.
//!
//! This crate owns every network round-trip the Mazzura client makes:
//! - [`ClientConfig`] - Backend location, loaded from the environment
//! - [`ApiClient`] - One typed method per backend endpoint
//! - [`ApiError`] - Connectivity vs. request failures
//!
//! # Example
//!
//! ```rust,no_run
//! use mazzura_client::{ApiClient, ClientConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let health = client.health().await?;
//! tracing::info!(message = %health.message, "backend reachable");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{BACKEND_URL_VAR, ClientConfig, ConfigError, DEFAULT_BACKEND_URL};
pub use error::ApiError;
