//! verse-tui - Terminal UI for Verse Explorer
//!
//! Provides the ratatui-based interface on top of `verse-app`: crossterm
//! event polling, the view function and its widgets, and the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
