//! API Configuration Snapshot
//!
//! The read-only view of an API's configuration that the panels render from.
//! The authoritative copy lives in the surrounding application's store; each
//! render reads a fresh snapshot and never writes back.

use serde::{Deserialize, Serialize};

use crate::scheme::{self, SecurityScheme};
use crate::transport::TransportSet;

/// Snapshot of the configuration fields the transport/security forms read.
///
/// `transport` is optional on purpose: a configuration that has never set a
/// transport list renders indeterminate toggles, which is a different state
/// from an explicitly empty list (unchecked toggles plus a validation
/// message).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfiguration {
    /// Transports the API is exposed over, if any have been configured.
    pub transport: Option<TransportSet>,
    /// Enabled security schemes.
    pub security_scheme: SecurityScheme,
}

impl ApiConfiguration {
    /// Whether mutual TLS is currently enabled.
    #[must_use]
    pub fn mutual_ssl_enabled(&self) -> bool {
        self.security_scheme.contains(scheme::MUTUAL_SSL)
    }
}
