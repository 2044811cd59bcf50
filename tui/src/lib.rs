//! Console TUI - Terminal surface for the apiman publisher console
//!
//! This crate renders the transport/security configuration forms from
//! `console-core` as a full-screen terminal UI.
//!
//! # Architecture
//!
//! - **Store**: owns the authoritative configuration and applies edit intents
//! - **Form**: renders the control tree built by `console-core`
//! - **App**: event loop, focus ring, intent dispatch

pub mod app;
pub mod form;
pub mod store;
pub mod theme;

pub use app::App;
