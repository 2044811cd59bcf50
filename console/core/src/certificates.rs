//! Certificate Management Seam
//!
//! The transport-level panel shows a certificate sub-panel when mutual TLS is
//! enabled, but certificate upload/delete belongs to a separate subsystem.
//! This module only defines the seam: a store trait the panel reads through,
//! and the no-op placeholder the panel is wired to until the real subsystem
//! is integrated.

use serde::{Deserialize, Serialize};

/// A client certificate as listed in the certificate sub-panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Alias the certificate is stored under.
    pub alias: String,
    /// PEM-encoded certificate content.
    pub content: String,
}

/// Collaborator owning the certificate collection for an API.
pub trait CertificateStore {
    /// Certificates currently associated with the API.
    fn certificates(&self) -> Vec<Certificate>;

    /// Request that a certificate be added.
    fn upload(&mut self, certificate: Certificate);

    /// Request that the certificate stored under `alias` be removed.
    fn delete(&mut self, alias: &str);
}

/// Placeholder store: empty collection, uploads and deletes are dropped.
///
/// TODO: replace with the shared certificate component once the endpoints
/// page and this panel can use the same one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCertificateStore;

impl CertificateStore for NoopCertificateStore {
    fn certificates(&self) -> Vec<Certificate> {
        Vec::new()
    }

    fn upload(&mut self, certificate: Certificate) {
        tracing::debug!(alias = %certificate.alias, "certificate management not wired up, upload dropped");
    }

    fn delete(&mut self, alias: &str) {
        tracing::debug!(%alias, "certificate management not wired up, delete dropped");
    }
}
