use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::Error;

/// The `msgtype` sub-discriminator carried inside `m.room.message` content
/// bodies. Unknown strings fall back to `Unknown`, same contract as
/// [`EventType`](crate::model::event::EventType).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// m.audio
    Audio,
    /// m.emote
    Emote,
    /// m.file
    File,
    /// m.image
    Image,
    /// m.location
    Location,
    /// m.notice
    Notice,
    /// m.text
    Text,
    /// m.video
    Video,
    /// Unrecognized message type
    Unknown,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Audio => "m.audio",
            MessageType::Emote => "m.emote",
            MessageType::File => "m.file",
            MessageType::Image => "m.image",
            MessageType::Location => "m.location",
            MessageType::Notice => "m.notice",
            MessageType::Text => "m.text",
            MessageType::Video => "m.video",
            MessageType::Unknown => "",
        }
    }

    pub fn parse(s: &str) -> MessageType {
        match s {
            "m.audio" => MessageType::Audio,
            "m.emote" => MessageType::Emote,
            "m.file" => MessageType::File,
            "m.image" => MessageType::Image,
            "m.location" => MessageType::Location,
            "m.notice" => MessageType::Notice,
            "m.text" => MessageType::Text,
            "m.video" => MessageType::Video,
            _ => {
                debug!("unrecognized message type: {}", s);
                MessageType::Unknown
            }
        }
    }

    /// Reads the `msgtype` discriminator out of a room-message content body.
    pub fn from_json(obj: &JsonValue) -> Result<MessageType, Error> {
        match obj.get("msgtype") {
            Some(JsonValue::String(s)) => Ok(MessageType::parse(s)),
            _ => Err(Error::missing("msgtype", "MessageContent")),
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageType {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D>(de: D) -> Result<MessageType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(de)?;
        Ok(MessageType::parse(&s))
    }
}
