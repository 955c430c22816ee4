//! # Letterbox - a terminal gallery of received letters
//!
//! Fetches the letters addressed to one viewer, newest first, and shows them
//! as a grid of mailboxes with page navigation. Hovering a mailbox reveals the
//! recipient name; activating it opens the letter's read route.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** (`state`): Application state, cloned and replaced on update
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (fetching, timers, logging)
//! - **View** (`presentation`): Rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use letterbox::{
//!     core::msg::{letters::LettersMsg, page::PageMsg},
//!     domain::{Letter, LetterCollection, PageSize},
//!     update, AppState, Msg,
//! };
//!
//! let state = AppState::new(PageSize::DEFAULT);
//! let letters: Vec<Letter> = (1..=10)
//!     .map(|id| Letter::new(id, "Mina", format!("2023-08-{id:02}T09:00:00Z")))
//!     .collect();
//!
//! let (state, _cmds) = update(Msg::Letters(LettersMsg::Loaded(LetterCollection::from(letters))), state);
//! assert_eq!(state.page_count(), 2);
//!
//! let (state, _cmds) = update(Msg::Page(PageMsg::Next), state);
//! assert_eq!(state.gallery().visible.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Letters, ordering and pagination
//! - [`infrastructure`] - Terminal, CLI, config, data sources
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - Layout, widgets and view
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use crate::integration::runtime::{GalleryRuntime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
