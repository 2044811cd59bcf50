//! Security Scheme Vocabulary
//!
//! Token vocabulary for API security schemes plus the mandatory/optional
//! derivation rule used by the transport-level security panel.
//!
//! # Design Philosophy
//!
//! A scheme set is pure data owned by the surrounding configuration store.
//! Panels only test membership on a snapshot of it; they never mutate it.
//! Unknown tokens are not rejected anywhere - a membership test on a token
//! nobody recognizes simply answers "not present".

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Mutual TLS: both client and server certificates are verified.
pub const MUTUAL_SSL: &str = "mutual-ssl";

/// Marker token: mutual TLS, once enabled, is required for every request.
pub const MUTUAL_SSL_MANDATORY: &str = "mutual-ssl-mandatory";

/// OAuth2 bearer token security.
pub const OAUTH2: &str = "oauth2";

/// HTTP basic authentication.
pub const BASIC_AUTH: &str = "basic_auth";

/// API key security.
pub const API_KEY: &str = "api_key";

/// Marker token: at least one application-level scheme is required for every
/// request. Not consulted by the transport-level derivation rule.
pub const APPLICATION_MANDATORY: &str = "oauth_basic_auth_api_key_mandatory";

/// Radio value meaning "mutual TLS is one acceptable option among several".
pub const OPTIONAL: &str = "optional";

/// Set of enabled security scheme tokens for an API.
///
/// Order is irrelevant; membership is tested, never indexed. The empty set is
/// a valid configuration (no security scheme selected yet).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityScheme(HashSet<String>);

impl SecurityScheme {
    /// Create an empty scheme set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `token` is currently enabled.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Enable a token. Returns `false` if it was already enabled.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.0.insert(token.into())
    }

    /// Disable a token. Returns `false` if it was not enabled.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.remove(token)
    }

    /// Whether no scheme is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of enabled tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the enabled tokens (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SecurityScheme {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Derived mandatory/optional signal for the transport-level selector.
///
/// This is a pure projection of [`SecurityScheme`], recomputed on every
/// render. It is never stored alongside the scheme set, so it cannot diverge
/// from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MandatorySelection {
    /// Mutual TLS is required for every request.
    Mandatory,
    /// Mutual TLS is one acceptable option among several.
    Optional,
    /// Mutual TLS is not enabled; the selector is meaningless.
    NotApplicable,
}

impl MandatorySelection {
    /// The radio value this selection pre-selects, if any.
    #[must_use]
    pub fn radio_value(&self) -> Option<&'static str> {
        match self {
            Self::Mandatory => Some(MUTUAL_SSL_MANDATORY),
            Self::Optional => Some(OPTIONAL),
            Self::NotApplicable => None,
        }
    }
}

/// Compute the pre-selected mandatory/optional value for a scheme set.
///
/// Rule, in priority order:
/// 1. Without `mutual-ssl` there is no choice to make.
/// 2. With mutual TLS as the only application-level scheme it cannot be
///    optional - there is nothing to fall back to.
/// 3. An explicit `mutual-ssl-mandatory` token wins.
/// 4. Otherwise optional.
///
/// Total over every input set; unknown tokens fall through to "not present".
#[must_use]
pub fn derive_mandatory(scheme: &SecurityScheme) -> MandatorySelection {
    if !scheme.contains(MUTUAL_SSL) {
        return MandatorySelection::NotApplicable;
    }
    if !(scheme.contains(OAUTH2) || scheme.contains(BASIC_AUTH)) {
        return MandatorySelection::Mandatory;
    }
    if scheme.contains(MUTUAL_SSL_MANDATORY) {
        MandatorySelection::Mandatory
    } else {
        MandatorySelection::Optional
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_mutual_ssl_is_not_applicable() {
        let empty = SecurityScheme::new();
        assert_eq!(derive_mandatory(&empty), MandatorySelection::NotApplicable);

        let oauth: SecurityScheme = [OAUTH2, BASIC_AUTH].into_iter().collect();
        assert_eq!(derive_mandatory(&oauth), MandatorySelection::NotApplicable);

        // Even a stray mandatory marker means nothing without mutual-ssl
        let stray: SecurityScheme = [MUTUAL_SSL_MANDATORY].into_iter().collect();
        assert_eq!(derive_mandatory(&stray), MandatorySelection::NotApplicable);
    }

    #[test]
    fn lone_mutual_ssl_is_mandatory() {
        let lone: SecurityScheme = [MUTUAL_SSL].into_iter().collect();
        assert_eq!(derive_mandatory(&lone), MandatorySelection::Mandatory);

        // api_key is not a fallback scheme for this rule
        let with_key: SecurityScheme = [MUTUAL_SSL, API_KEY].into_iter().collect();
        assert_eq!(derive_mandatory(&with_key), MandatorySelection::Mandatory);

        // The application-level mandatory marker is not consulted either
        let with_marker: SecurityScheme =
            [MUTUAL_SSL, APPLICATION_MANDATORY].into_iter().collect();
        assert_eq!(derive_mandatory(&with_marker), MandatorySelection::Mandatory);
    }

    #[test]
    fn explicit_mandatory_token_wins() {
        let scheme: SecurityScheme = [MUTUAL_SSL, OAUTH2, MUTUAL_SSL_MANDATORY]
            .into_iter()
            .collect();
        assert_eq!(derive_mandatory(&scheme), MandatorySelection::Mandatory);
    }

    #[test]
    fn mutual_ssl_with_fallback_is_optional() {
        let with_oauth: SecurityScheme = [MUTUAL_SSL, OAUTH2].into_iter().collect();
        assert_eq!(derive_mandatory(&with_oauth), MandatorySelection::Optional);

        let with_basic: SecurityScheme = [MUTUAL_SSL, BASIC_AUTH].into_iter().collect();
        assert_eq!(derive_mandatory(&with_basic), MandatorySelection::Optional);
    }

    #[test]
    fn derivation_is_pure() {
        let scheme: SecurityScheme = [MUTUAL_SSL, OAUTH2].into_iter().collect();
        let before = scheme.clone();

        let first = derive_mandatory(&scheme);
        let second = derive_mandatory(&scheme);

        assert_eq!(first, second);
        assert_eq!(scheme, before);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let scheme: SecurityScheme = [MUTUAL_SSL, "totally-made-up"].into_iter().collect();
        assert_eq!(derive_mandatory(&scheme), MandatorySelection::Mandatory);
    }

    #[test]
    fn radio_values() {
        assert_eq!(
            MandatorySelection::Mandatory.radio_value(),
            Some(MUTUAL_SSL_MANDATORY)
        );
        assert_eq!(MandatorySelection::Optional.radio_value(), Some(OPTIONAL));
        assert_eq!(MandatorySelection::NotApplicable.radio_value(), None);
    }
}
