use serde::{Deserialize, Serialize};

/// Metadata the homeserver attaches to an event, outside its signed content.
///
/// Every field is optional on the wire and decodes to its zero default when
/// absent. On encode a field equal to its default is left out, so an input
/// like `{"age": 0}` comes back as `{}` — absent and explicitly-zero are
/// indistinguishable after a round trip.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UnsignedData {
    /// Milliseconds elapsed since the event was sent, as computed by the
    /// local homeserver. May be negative-looking or inflated when clocks
    /// disagree.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub age: u64,
    /// The client-supplied transaction ID, if the client being given the
    /// event is the one that sent it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev_sender: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replaces_state: String,
    /// The event ID that redacted this event. Read-only on the wire: the
    /// server never expects it back, so it is not serialized.
    #[serde(default, skip_serializing)]
    pub redacted_by: String,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}
