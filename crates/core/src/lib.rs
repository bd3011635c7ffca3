//! Mazzura Core - Shared domain types.
//!
//! This crate provides the records exchanged with the Mazzura backend and the
//! editable form drafts that produce them:
//! - `client` - HTTP wrapper that sends and receives these records
//! - `tui` - Terminal client that binds drafts to input fields
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no terminal access. Everything here is deterministic and can be
//! tested without a backend.
//!
//! # Modules
//!
//! - [`types`] - Wire records (profile, wardrobe item, outfit, challenge) and enums
//! - [`parse`] - Text-input coercion for numbers and comma-separated lists
//! - [`draft`] - Form drafts and their draft-to-payload transforms

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod parse;
pub mod types;

pub use draft::{ItemDraft, OutfitDraft, ProfileDraft};
pub use types::*;
