//! Configuration Store
//!
//! The externally owned collaborator that the panels dispatch edit intents
//! to. It holds the authoritative [`ApiConfiguration`], applies intents one
//! at a time, and hands out snapshots for the next render.
//!
//! The panels in `console-core` only define the *shape* of the intents; how
//! they are applied is this store's business. The surface never reads a
//! result back from a dispatch - it just renders the next snapshot.

use console_core::intents::{EditIntent, SchemeEdit};
use console_core::{scheme, ApiConfiguration, TransportSet};
use tokio::sync::mpsc;

/// Single-writer owner of the API configuration.
pub struct ConfigStore {
    api: ApiConfiguration,
    tx: mpsc::UnboundedSender<EditIntent>,
    rx: mpsc::UnboundedReceiver<EditIntent>,
}

impl ConfigStore {
    /// Create a store owning `initial`.
    #[must_use]
    pub fn new(initial: ApiConfiguration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api: initial,
            tx,
            rx,
        }
    }

    /// A dispatcher handle for the panels. Cloneable; dispatch never fails.
    #[must_use]
    pub fn dispatcher(&self) -> mpsc::UnboundedSender<EditIntent> {
        self.tx.clone()
    }

    /// The current configuration snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &ApiConfiguration {
        &self.api
    }

    /// Apply all pending intents, in dispatch order. Returns how many were
    /// applied, so the caller knows whether a re-render is due.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.rx.try_recv() {
            self.apply(intent);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, intent: EditIntent) {
        tracing::debug!(?intent, "applying edit intent");
        match intent {
            EditIntent::Transport { checked, value } => {
                // First edit of an undefined transport set defines it.
                let set = self.api.transport.get_or_insert_with(TransportSet::new);
                if checked {
                    set.insert(value);
                } else {
                    set.remove(&value);
                }
            }
            EditIntent::SecurityScheme(SchemeEdit::Toggle { checked, value }) => {
                if checked {
                    self.api.security_scheme.insert(value);
                } else {
                    let was_mutual = value == scheme::MUTUAL_SSL;
                    self.api.security_scheme.remove(&value);
                    // The mandatory marker is meaningless without mutual TLS.
                    if was_mutual {
                        self.api.security_scheme.remove(scheme::MUTUAL_SSL_MANDATORY);
                    }
                }
            }
            EditIntent::SecurityScheme(SchemeEdit::Select { name, value }) => {
                if value == name {
                    self.api.security_scheme.insert(name);
                } else {
                    self.api.security_scheme.remove(&name);
                }
            }
        }
    }
}
