//! verse-app - Application state and orchestration for Verse Explorer
//!
//! This crate implements the TEA (The Elm Architecture) pattern: all UI state
//! lives in [`AppState`] and changes only through [`handler::update`]. Lookups
//! run as background tasks that report back with a [`Message`]. Configuration
//! loading lives here as well.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod search;
pub mod signals;
pub mod state;
pub mod viewer;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use search::{RequestId, SearchField, SearchState};
pub use state::{AppPhase, AppState, Focus};
pub use viewer::VerseViewState;
