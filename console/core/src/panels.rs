//! Configuration Panels
//!
//! The two presentation components as pure builders: each render takes a
//! configuration snapshot plus a permission flag and produces a control tree
//! (labeled, possibly-disabled controls and one always-present validation
//! slot). User interaction on a control builds an [`EditIntent`]; applying it
//! is the dispatcher's job, never the panel's.
//!
//! # Design Philosophy
//!
//! - Derived state (the mandatory/optional pre-selection) is recomputed from
//!   the snapshot on every build, never stored alongside it.
//! - Lack of edit permission disables controls, it never hides them:
//!   visibility of configuration must not depend on permission.
//! - Interaction methods return `None` instead of an intent when a control is
//!   inert, so a simulated interaction on a disabled control emits nothing.

use crate::api::ApiConfiguration;
use crate::certificates::{Certificate, CertificateStore, NoopCertificateStore};
use crate::intents::{EditIntent, SchemeEdit};
use crate::scheme::{self, derive_mandatory};
use crate::transport::{self, TransportSet};

/// Heading of the transport-level security panel.
pub const TRANSPORT_LEVEL_HEADING: &str = "Transport Level Security";

/// Validation message shown while the transport set is empty.
pub const EMPTY_TRANSPORT_MESSAGE: &str = "Please select at least one transport!";

/// Helper text under the mandatory/optional selector.
pub const MANDATORY_HELPER: &str =
    "Choose whether transport level security is mandatory or optional";

/// Three-valued checkbox state.
///
/// `Indeterminate` is rendered when the underlying set is undefined (not yet
/// configured), as opposed to defined-but-not-containing the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    /// The token is present in the set.
    Checked,
    /// The set is defined and does not contain the token.
    Unchecked,
    /// The set itself is undefined; membership is unknown.
    Indeterminate,
}

impl CheckState {
    /// Whether an interaction on this state requests a check (rather than an
    /// un-check). Indeterminate behaves like unchecked here.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }
}

/// A labeled checkbox bound to a set-membership token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggle {
    /// Display label.
    pub label: String,
    /// The token this toggle governs.
    pub value: String,
    /// Current checkbox state.
    pub state: CheckState,
    /// Whether the control accepts interaction.
    pub enabled: bool,
}

/// One option inside a [`RadioGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioOption {
    /// Display label.
    pub label: String,
    /// Value emitted when this option is selected.
    pub value: String,
}

/// A radio selector over mutually exclusive values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioGroup {
    /// Group name, carried in the emitted intent.
    pub name: String,
    /// Options in display order.
    pub options: Vec<RadioOption>,
    /// Pre-selected value, if any.
    pub selected: Option<String>,
    /// Whether the options accept interaction. A disabled group is still
    /// rendered so the user can see the constraint exists.
    pub enabled: bool,
    /// Helper text rendered under the group.
    pub helper: String,
}

/// Container for the selector's validation message.
///
/// The slot always exists, even with no message, so rendering it always
/// occupies layout space and the form never shifts when a message appears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationSlot {
    /// Current message, if the configuration is not submittable.
    pub message: Option<String>,
}

/// Transport checkboxes with inline validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportSelector {
    toggles: Vec<Toggle>,
    validation: ValidationSlot,
}

impl TransportSelector {
    /// Build the selector from a transport snapshot.
    ///
    /// `transport` is `None` when the configuration has never set a transport
    /// list; the toggles then render indeterminate and no validation message
    /// is shown.
    #[must_use]
    pub fn new(transport: Option<&TransportSet>, read_only: bool) -> Self {
        let toggles = transport::KNOWN_TRANSPORTS
            .iter()
            .map(|&token| Toggle {
                label: token.to_uppercase(),
                value: token.to_string(),
                state: match transport {
                    None => CheckState::Indeterminate,
                    Some(set) if set.contains(token) => CheckState::Checked,
                    Some(_) => CheckState::Unchecked,
                },
                enabled: !read_only,
            })
            .collect();

        let message = match transport {
            Some(set) if set.is_empty() => Some(EMPTY_TRANSPORT_MESSAGE.to_string()),
            _ => None,
        };

        Self {
            toggles,
            validation: ValidationSlot { message },
        }
    }

    /// The transport toggles, in display order.
    #[must_use]
    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    /// The always-present validation slot.
    #[must_use]
    pub fn validation(&self) -> &ValidationSlot {
        &self.validation
    }

    /// Build the intent a toggle interaction would emit.
    ///
    /// `None` when the control is disabled or `value` is not a known
    /// transport token.
    #[must_use]
    pub fn toggle(&self, value: &str) -> Option<EditIntent> {
        let toggle = self.toggles.iter().find(|t| t.value == value)?;
        if !toggle.enabled {
            return None;
        }
        Some(EditIntent::Transport {
            checked: !toggle.state.is_checked(),
            value: toggle.value.clone(),
        })
    }
}

/// Certificate sub-panel contents, read through the certificate seam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificatePanel {
    /// Certificates currently associated with the API.
    pub certificates: Vec<Certificate>,
}

/// The transport-level security panel.
///
/// Renders the delegated transport selector, the mutual-TLS toggle, and -
/// only while mutual TLS is enabled - the mandatory/optional selector plus
/// the certificate sub-panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportSecurityPanel {
    transports: TransportSelector,
    mutual_ssl: Toggle,
    mandatory: Option<RadioGroup>,
    certificates: Option<CertificatePanel>,
}

impl TransportSecurityPanel {
    /// Build the panel with the certificate seam left unwired (empty
    /// collection, no-op callbacks).
    #[must_use]
    pub fn new(api: &ApiConfiguration, multi_level_allowed: bool, read_only: bool) -> Self {
        Self::with_certificates(api, multi_level_allowed, read_only, &NoopCertificateStore)
    }

    /// Build the panel reading certificates through `store`.
    #[must_use]
    pub fn with_certificates(
        api: &ApiConfiguration,
        multi_level_allowed: bool,
        read_only: bool,
        store: &dyn CertificateStore,
    ) -> Self {
        let mutual_enabled = api.mutual_ssl_enabled();

        let mutual_ssl = Toggle {
            label: "Mutual SSL".to_string(),
            value: scheme::MUTUAL_SSL.to_string(),
            state: if mutual_enabled {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            },
            enabled: !read_only,
        };

        let mandatory = mutual_enabled.then(|| RadioGroup {
            name: scheme::MUTUAL_SSL_MANDATORY.to_string(),
            options: vec![
                RadioOption {
                    label: "Mandatory".to_string(),
                    value: scheme::MUTUAL_SSL_MANDATORY.to_string(),
                },
                RadioOption {
                    label: "Optional".to_string(),
                    value: scheme::OPTIONAL.to_string(),
                },
            ],
            selected: derive_mandatory(&api.security_scheme)
                .radio_value()
                .map(str::to_string),
            // Mutual TLS may not be combined with other schemes unless
            // multi-level security is allowed; the group is shown but inert.
            enabled: multi_level_allowed && !read_only,
            helper: MANDATORY_HELPER.to_string(),
        });

        let certificates = mutual_enabled.then(|| CertificatePanel {
            certificates: store.certificates(),
        });

        Self {
            transports: TransportSelector::new(api.transport.as_ref(), read_only),
            mutual_ssl,
            mandatory,
            certificates,
        }
    }

    /// The delegated transport selector.
    #[must_use]
    pub fn transports(&self) -> &TransportSelector {
        &self.transports
    }

    /// The mutual-TLS toggle.
    #[must_use]
    pub fn mutual_ssl(&self) -> &Toggle {
        &self.mutual_ssl
    }

    /// The mandatory/optional selector, present while mutual TLS is enabled.
    #[must_use]
    pub fn mandatory(&self) -> Option<&RadioGroup> {
        self.mandatory.as_ref()
    }

    /// The certificate sub-panel, present while mutual TLS is enabled.
    #[must_use]
    pub fn certificates(&self) -> Option<&CertificatePanel> {
        self.certificates.as_ref()
    }

    /// Build the intent a transport toggle interaction would emit.
    #[must_use]
    pub fn toggle_transport(&self, value: &str) -> Option<EditIntent> {
        self.transports.toggle(value)
    }

    /// Build the intent toggling mutual TLS would emit. `None` when the
    /// control is disabled.
    #[must_use]
    pub fn toggle_mutual_ssl(&self) -> Option<EditIntent> {
        if !self.mutual_ssl.enabled {
            return None;
        }
        Some(EditIntent::SecurityScheme(SchemeEdit::Toggle {
            checked: !self.mutual_ssl.state.is_checked(),
            value: self.mutual_ssl.value.clone(),
        }))
    }

    /// Build the intent selecting a mandatory/optional option would emit.
    ///
    /// `None` when the group is absent, inert, or `value` is not one of its
    /// options.
    #[must_use]
    pub fn select_mandatory(&self, value: &str) -> Option<EditIntent> {
        let group = self.mandatory.as_ref()?;
        if !group.enabled || !group.options.iter().any(|o| o.value == value) {
            return None;
        }
        Some(EditIntent::SecurityScheme(SchemeEdit::Select {
            name: group.name.clone(),
            value: value.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transport::{HTTP, HTTPS};

    fn api(transport: Option<&[&str]>, schemes: &[&str]) -> ApiConfiguration {
        ApiConfiguration {
            transport: transport.map(|t| t.iter().copied().collect()),
            security_scheme: schemes.iter().copied().collect(),
        }
    }

    #[test]
    fn empty_transport_set_shows_validation_message() {
        let selector = TransportSelector::new(Some(&TransportSet::new()), false);
        assert_eq!(
            selector.validation().message.as_deref(),
            Some(EMPTY_TRANSPORT_MESSAGE)
        );
    }

    #[test]
    fn populated_transport_set_shows_no_message() {
        let set: TransportSet = [HTTP].into_iter().collect();
        let selector = TransportSelector::new(Some(&set), false);
        assert_eq!(selector.validation().message, None);
    }

    #[test]
    fn undefined_transport_set_is_indeterminate_without_message() {
        let selector = TransportSelector::new(None, false);
        assert_eq!(selector.validation().message, None);
        for toggle in selector.toggles() {
            assert_eq!(toggle.state, CheckState::Indeterminate);
        }
        // Interacting with an indeterminate toggle requests a check
        assert_eq!(
            selector.toggle(HTTP),
            Some(EditIntent::Transport {
                checked: true,
                value: HTTP.to_string(),
            })
        );
    }

    #[test]
    fn toggling_https_emits_one_intent_without_mutating_snapshot() {
        let set: TransportSet = [HTTP].into_iter().collect();
        let before = set.clone();
        let selector = TransportSelector::new(Some(&set), false);

        let intent = selector.toggle(HTTPS);
        assert_eq!(
            intent,
            Some(EditIntent::Transport {
                checked: true,
                value: HTTPS.to_string(),
            })
        );
        assert_eq!(set, before);

        // Unchecking a checked toggle requests removal
        assert_eq!(
            selector.toggle(HTTP),
            Some(EditIntent::Transport {
                checked: false,
                value: HTTP.to_string(),
            })
        );
    }

    #[test]
    fn unknown_transport_emits_nothing() {
        let set: TransportSet = [HTTP].into_iter().collect();
        let selector = TransportSelector::new(Some(&set), false);
        assert_eq!(selector.toggle("ftp"), None);
    }

    #[test]
    fn read_only_selector_renders_disabled_and_emits_nothing() {
        let set: TransportSet = [HTTP].into_iter().collect();
        let selector = TransportSelector::new(Some(&set), true);

        for toggle in selector.toggles() {
            assert!(!toggle.enabled);
        }
        assert_eq!(selector.toggle(HTTP), None);
        assert_eq!(selector.toggle(HTTPS), None);
    }

    #[test]
    fn panel_without_mutual_ssl_hides_selector_and_certificates() {
        let api = api(Some(&[HTTP, HTTPS]), &[scheme::OAUTH2]);
        let panel = TransportSecurityPanel::new(&api, true, false);

        assert_eq!(panel.mutual_ssl().state, CheckState::Unchecked);
        assert_eq!(panel.mandatory(), None);
        assert_eq!(panel.certificates(), None);
        assert_eq!(panel.select_mandatory(scheme::OPTIONAL), None);
    }

    #[test]
    fn panel_with_mutual_ssl_preselects_derived_value() {
        let api = api(Some(&[HTTPS]), &[scheme::MUTUAL_SSL, scheme::OAUTH2]);
        let panel = TransportSecurityPanel::new(&api, true, false);

        let group = panel.mandatory().expect("selector present");
        assert_eq!(group.selected.as_deref(), Some(scheme::OPTIONAL));
        assert!(group.enabled);

        let lone = self::api(Some(&[HTTPS]), &[scheme::MUTUAL_SSL]);
        let panel = TransportSecurityPanel::new(&lone, true, false);
        let group = panel.mandatory().expect("selector present");
        assert_eq!(group.selected.as_deref(), Some(scheme::MUTUAL_SSL_MANDATORY));
    }

    #[test]
    fn selector_is_inert_without_multi_level_security() {
        let api = api(Some(&[HTTPS]), &[scheme::MUTUAL_SSL, scheme::OAUTH2]);
        let panel = TransportSecurityPanel::new(&api, false, false);

        // Shown but inert, not hidden
        let group = panel.mandatory().expect("selector present");
        assert!(!group.enabled);
        assert_eq!(panel.select_mandatory(scheme::MUTUAL_SSL_MANDATORY), None);
    }

    #[test]
    fn mutual_ssl_toggle_emits_scheme_intent() {
        let api = api(Some(&[HTTPS]), &[scheme::OAUTH2]);
        let panel = TransportSecurityPanel::new(&api, true, false);

        assert_eq!(
            panel.toggle_mutual_ssl(),
            Some(EditIntent::SecurityScheme(SchemeEdit::Toggle {
                checked: true,
                value: scheme::MUTUAL_SSL.to_string(),
            }))
        );
    }

    #[test]
    fn mandatory_selection_emits_named_intent() {
        let api = api(Some(&[HTTPS]), &[scheme::MUTUAL_SSL, scheme::OAUTH2]);
        let panel = TransportSecurityPanel::new(&api, true, false);

        assert_eq!(
            panel.select_mandatory(scheme::MUTUAL_SSL_MANDATORY),
            Some(EditIntent::SecurityScheme(SchemeEdit::Select {
                name: scheme::MUTUAL_SSL_MANDATORY.to_string(),
                value: scheme::MUTUAL_SSL_MANDATORY.to_string(),
            }))
        );
        assert_eq!(panel.select_mandatory("neither"), None);
    }

    #[test]
    fn read_only_panel_disables_everything_and_emits_nothing() {
        let api = api(
            Some(&[HTTPS]),
            &[scheme::MUTUAL_SSL, scheme::OAUTH2, scheme::MUTUAL_SSL_MANDATORY],
        );
        let panel = TransportSecurityPanel::new(&api, true, true);

        assert!(!panel.mutual_ssl().enabled);
        assert!(!panel.mandatory().expect("selector present").enabled);
        for toggle in panel.transports().toggles() {
            assert!(!toggle.enabled);
        }

        assert_eq!(panel.toggle_mutual_ssl(), None);
        assert_eq!(panel.toggle_transport(HTTPS), None);
        assert_eq!(panel.select_mandatory(scheme::OPTIONAL), None);

        // Configuration stays visible: the derived selection still renders
        let group = panel.mandatory().expect("selector present");
        assert_eq!(group.selected.as_deref(), Some(scheme::MUTUAL_SSL_MANDATORY));
    }

    #[test]
    fn certificate_panel_reads_through_store() {
        struct FixedStore(Vec<Certificate>);
        impl CertificateStore for FixedStore {
            fn certificates(&self) -> Vec<Certificate> {
                self.0.clone()
            }
            fn upload(&mut self, certificate: Certificate) {
                self.0.push(certificate);
            }
            fn delete(&mut self, alias: &str) {
                self.0.retain(|c| c.alias != alias);
            }
        }

        let store = FixedStore(vec![Certificate {
            alias: "gateway".to_string(),
            content: "-----BEGIN CERTIFICATE-----".to_string(),
        }]);
        let api = api(Some(&[HTTPS]), &[scheme::MUTUAL_SSL]);
        let panel = TransportSecurityPanel::with_certificates(&api, true, false, &store);

        let certs = panel.certificates().expect("sub-panel present");
        assert_eq!(certs.certificates.len(), 1);
        assert_eq!(certs.certificates[0].alias, "gateway");
    }
}
