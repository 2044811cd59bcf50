//! Transport Vocabulary
//!
//! Token vocabulary for the network transports an API can be exposed over,
//! plus the set type the transport selector reads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Plaintext HTTP transport.
pub const HTTP: &str = "http";

/// TLS-encrypted HTTP transport.
pub const HTTPS: &str = "https";

/// Transports the selector renders a toggle for, in display order.
pub const KNOWN_TRANSPORTS: &[&str] = &[HTTP, HTTPS];

/// Set of transport tokens an API is exposed over.
///
/// The empty set is valid but not submittable; the selector surfaces a
/// validation message for it. A configuration may also carry *no* transport
/// set at all (`Option<TransportSet>` upstream), which is a distinct state:
/// membership is unknown rather than false.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportSet(HashSet<String>);

impl TransportSet {
    /// Create an empty transport set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `token` is currently enabled.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Enable a transport. Returns `false` if it was already enabled.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.0.insert(token.into())
    }

    /// Disable a transport. Returns `false` if it was not enabled.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.remove(token)
    }

    /// Whether no transport is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of enabled transports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the enabled tokens (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TransportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
