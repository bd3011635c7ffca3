//! Terminal client for the Mazzura fashion service.
//!
//! The crate follows a message/update/view split:
//!
//! - [`message::Msg`] describes everything that can happen: key presses and
//!   finished requests.
//! - [`update::update`] is the only writer of [`state::AppState`]; it returns
//!   [`command::Command`]s instead of performing I/O.
//! - [`view::render`] draws the state and never mutates it.
//! - [`app`] wires the three together around a crossterm terminal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod command;
pub mod form;
pub mod input;
pub mod message;
pub mod state;
pub mod update;
pub mod view;
