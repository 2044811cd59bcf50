//! Edit Intents
//!
//! Messages describing a requested configuration change. Panels build these
//! on user interaction and forward them to an externally owned dispatcher;
//! the dispatcher alone mutates configuration and makes the new snapshot
//! visible in time for the next render.
//!
//! # Design Philosophy
//!
//! Panels are "dumb" renderers. They don't interpret what an edit means -
//! they just report what the user asked for. All state changes are
//! *requested*, never *applied*, by the presentation layer.

use serde::{Deserialize, Serialize};

/// A requested configuration change.
///
/// The serialized form matches the console's dispatch shape: a `field`
/// discriminator plus an `event` payload carrying either a checkbox state
/// (`checked`/`value`) or a radio selection (`name`/`value`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "event")]
pub enum EditIntent {
    /// Toggle a transport token on or off.
    #[serde(rename = "transport")]
    Transport {
        /// New checkbox state requested by the user.
        checked: bool,
        /// The transport token the checkbox governs.
        value: String,
    },

    /// Change the enabled security schemes.
    #[serde(rename = "securityScheme")]
    SecurityScheme(SchemeEdit),
}

/// Payload of a security-scheme edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeEdit {
    /// Checkbox toggle of a single scheme token.
    Toggle {
        /// New checkbox state requested by the user.
        checked: bool,
        /// The scheme token the checkbox governs.
        value: String,
    },

    /// Radio selection within a group.
    Select {
        /// The token the radio group governs (its group name).
        name: String,
        /// The selected radio value.
        value: String,
    },
}

/// The externally owned dispatcher panels forward intents to.
///
/// Contract: callable any number of times, never fails for well-formed
/// intents, and makes the effect of an intent visible in the configuration
/// snapshot passed into the next render. Dispatch never reads back a result.
pub trait ConfigDispatcher {
    /// Request that `intent` be applied to the configuration.
    fn dispatch(&self, intent: EditIntent);
}

impl ConfigDispatcher for tokio::sync::mpsc::UnboundedSender<EditIntent> {
    fn dispatch(&self, intent: EditIntent) {
        // A dropped store means the surface is shutting down; the intent is
        // moot, not an error.
        if let Err(err) = self.send(intent) {
            tracing::debug!("config store gone, intent discarded: {err}");
        }
    }
}

/// Adapter turning a plain closure into a [`ConfigDispatcher`].
pub struct FnDispatcher<F>(pub F);

impl<F: Fn(EditIntent)> ConfigDispatcher for FnDispatcher<F> {
    fn dispatch(&self, intent: EditIntent) {
        (self.0)(intent);
    }
}
