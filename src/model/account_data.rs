use serde::{Deserialize, Serialize};

use crate::model::event::EventType;

/// Account-data content listing event types a client should hide from the
/// timeline.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HiddenEvents {
    /// The hidden event types.
    #[serde(default)]
    pub hidden_event_types: Vec<EventType>,
}
