use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::model::room_event::RoomEvent;

/// Content body of an `m.sticker` event.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StickerImage {
    /// Description of the sticker image, used as alt text.
    pub body: String,
    /// The mxc URI of the sticker image.
    pub url: String,
    /// Image metadata (dimensions, mimetype, thumbnail). Not further typed
    /// at this layer.
    #[serde(default)]
    pub info: JsonValue,
}

/// A sticker is an ordinary room event with an image content body.
pub type Sticker = RoomEvent<StickerImage>;
