//! Terminal client for managing categories and feeds on a
//! feed-aggregation server.
//!
//! The server speaks a JSON envelope protocol; this crate wraps it in an
//! [`api::ApiClient`], drives modal forms through [`form`], and renders
//! everything with ratatui in [`ui`].

pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod modal;
pub mod model;
pub mod shortcuts;
pub mod theme;
pub mod ui;
