//! Terminal User Interface module.
//!
//! This module provides the TUI for the feed manager, including:
//! - Main event loop (`run`)
//! - Keyboard input handling with modal, confirm, and help layers
//! - Rendering for the category and feed panels plus overlays
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Frame rendering dispatch
//! - `helpers` - Background loads and submit orchestration
//! - `categories` - Category list panel
//! - `feeds` - Feed list panel
//! - `form_view` - Modal form widget
//! - `help` - Shortcut help overlay
//! - `status` - Status bar widget
//! - `toast` - Toast notification stack

mod categories;
mod events;
mod feeds;
mod form_view;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;
pub mod toast;

// Re-export the public API
pub use loop_runner::{run, Action};
