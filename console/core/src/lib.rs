//! Console Core - Headless Form Logic for the apiman Publisher Console
//!
//! This crate implements the transport/security configuration forms of an
//! API-management console as pure logic, completely independent of any UI
//! framework. It can drive a TUI, a web surface, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI Surfaces                        │
//! │        ┌─────────┐  ┌─────────┐  ┌────────────┐          │
//! │        │   TUI   │  │   Web   │  │  Headless  │          │
//! │        └────┬────┘  └────┬────┘  └─────┬──────┘          │
//! │             └────────────┴─────────────┘                 │
//! │                          │                               │
//! │                 EditIntent (up)                          │
//! │           ApiConfiguration snapshot (down)               │
//! │                          │                               │
//! └──────────────────────────┼───────────────────────────────┘
//!                            │
//! ┌──────────────────────────┼───────────────────────────────┐
//! │                   CONFIGURATION STORE                    │
//! │        (externally owned; applies one intent at a        │
//! │         time, next render sees the new snapshot)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every render is a pure computation: panel builders take a configuration
//! snapshot plus a permission flag and produce a control tree. Interacting
//! with a control builds an [`EditIntent`]; the panels never mutate the
//! configuration themselves.
//!
//! # Key Types
//!
//! - [`TransportSecurityPanel`]: mutual-TLS toggle, mandatory/optional
//!   selector, certificate seam, delegated transport selector
//! - [`TransportSelector`]: per-transport toggles with inline validation
//! - [`derive_mandatory`]: the pure mandatory/optional derivation rule
//! - [`EditIntent`]: a requested configuration change
//! - [`ConfigDispatcher`]: the externally owned dispatcher seam
//!
//! # Module Overview
//!
//! - [`api`]: the configuration snapshot the forms read
//! - [`certificates`]: certificate-management seam (trait + no-op store)
//! - [`config`]: TOML configuration file support
//! - [`intents`]: edit-intent contract and dispatcher seam
//! - [`panels`]: the two form components as pure control-tree builders
//! - [`scheme`]: security-scheme vocabulary and the derivation rule
//! - [`transport`]: transport vocabulary and set type
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure form logic that can be rendered anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod certificates;
pub mod config;
pub mod intents;
pub mod panels;
pub mod scheme;
pub mod transport;

// Re-exports for convenience
pub use api::ApiConfiguration;
pub use certificates::{Certificate, CertificateStore, NoopCertificateStore};
pub use config::{default_config_path, load_config, load_config_from_path, ConfigError, ConsoleToml};
pub use intents::{ConfigDispatcher, EditIntent, FnDispatcher, SchemeEdit};
pub use panels::{
    CheckState, RadioGroup, RadioOption, Toggle, TransportSecurityPanel, TransportSelector,
    ValidationSlot,
};
pub use scheme::{derive_mandatory, MandatorySelection, SecurityScheme};
pub use transport::TransportSet;
