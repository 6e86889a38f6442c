use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::Error;
use crate::model::string_field;

/// The kinds of events defined by the client-server API.
///
/// Any discriminator string this enum does not know about maps to
/// `Unsupported`, so parsing is total and newer servers do not break older
/// clients. `Unsupported` does not remember the original string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// m.key.verification.cancel
    KeyVerificationCancel,
    /// m.key.verification.request
    KeyVerificationRequest,
    /// m.key.verification.start
    KeyVerificationStart,
    /// m.key.verification.accept
    KeyVerificationAccept,
    /// m.key.verification.key
    KeyVerificationKey,
    /// m.key.verification.mac
    KeyVerificationMac,
    /// m.room_key
    RoomKey,
    /// m.room_key_request
    RoomKeyRequest,
    /// m.room.aliases
    RoomAliases,
    /// m.room.avatar
    RoomAvatar,
    /// m.room.canonical_alias
    RoomCanonicalAlias,
    /// m.room.create
    RoomCreate,
    /// m.room.encrypted
    RoomEncrypted,
    /// m.room.encryption
    RoomEncryption,
    /// m.room.guest_access
    RoomGuestAccess,
    /// m.room.history_visibility
    RoomHistoryVisibility,
    /// m.room.join_rules
    RoomJoinRules,
    /// m.room.member
    RoomMember,
    /// m.room.message
    RoomMessage,
    /// m.room.name
    RoomName,
    /// m.room.power_levels
    RoomPowerLevels,
    /// m.room.topic
    RoomTopic,
    /// m.room.redaction
    RoomRedaction,
    /// m.room.pinned_events
    RoomPinnedEvents,
    /// m.room.tombstone
    RoomTombstone,
    /// m.sticker
    Sticker,
    /// m.tag
    Tag,
    /// m.push_rules
    PushRules,
    /// Unrecognized event
    Unsupported,
}

impl EventType {
    /// The wire discriminator for this event kind. `Unsupported` has none
    /// and yields the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::KeyVerificationCancel => "m.key.verification.cancel",
            EventType::KeyVerificationRequest => "m.key.verification.request",
            EventType::KeyVerificationStart => "m.key.verification.start",
            EventType::KeyVerificationAccept => "m.key.verification.accept",
            EventType::KeyVerificationKey => "m.key.verification.key",
            EventType::KeyVerificationMac => "m.key.verification.mac",
            EventType::RoomKey => "m.room_key",
            EventType::RoomKeyRequest => "m.room_key_request",
            EventType::RoomAliases => "m.room.aliases",
            EventType::RoomAvatar => "m.room.avatar",
            EventType::RoomCanonicalAlias => "m.room.canonical_alias",
            EventType::RoomCreate => "m.room.create",
            EventType::RoomEncrypted => "m.room.encrypted",
            EventType::RoomEncryption => "m.room.encryption",
            EventType::RoomGuestAccess => "m.room.guest_access",
            EventType::RoomHistoryVisibility => "m.room.history_visibility",
            EventType::RoomJoinRules => "m.room.join_rules",
            EventType::RoomMember => "m.room.member",
            EventType::RoomMessage => "m.room.message",
            EventType::RoomName => "m.room.name",
            EventType::RoomPowerLevels => "m.room.power_levels",
            EventType::RoomTopic => "m.room.topic",
            EventType::RoomRedaction => "m.room.redaction",
            EventType::RoomPinnedEvents => "m.room.pinned_events",
            EventType::RoomTombstone => "m.room.tombstone",
            EventType::Sticker => "m.sticker",
            EventType::Tag => "m.tag",
            EventType::PushRules => "m.push_rules",
            EventType::Unsupported => "",
        }
    }

    /// Resolves a wire discriminator. Matching is exact and case-sensitive;
    /// anything else is `Unsupported`. Never fails.
    pub fn parse(s: &str) -> EventType {
        match s {
            "m.key.verification.cancel" => EventType::KeyVerificationCancel,
            "m.key.verification.request" => EventType::KeyVerificationRequest,
            "m.key.verification.start" => EventType::KeyVerificationStart,
            "m.key.verification.accept" => EventType::KeyVerificationAccept,
            "m.key.verification.key" => EventType::KeyVerificationKey,
            "m.key.verification.mac" => EventType::KeyVerificationMac,
            "m.room_key" => EventType::RoomKey,
            "m.room_key_request" => EventType::RoomKeyRequest,
            "m.room.aliases" => EventType::RoomAliases,
            "m.room.avatar" => EventType::RoomAvatar,
            "m.room.canonical_alias" => EventType::RoomCanonicalAlias,
            "m.room.create" => EventType::RoomCreate,
            "m.room.encrypted" => EventType::RoomEncrypted,
            "m.room.encryption" => EventType::RoomEncryption,
            "m.room.guest_access" => EventType::RoomGuestAccess,
            "m.room.history_visibility" => EventType::RoomHistoryVisibility,
            "m.room.join_rules" => EventType::RoomJoinRules,
            "m.room.member" => EventType::RoomMember,
            "m.room.message" => EventType::RoomMessage,
            "m.room.name" => EventType::RoomName,
            "m.room.power_levels" => EventType::RoomPowerLevels,
            "m.room.topic" => EventType::RoomTopic,
            "m.room.redaction" => EventType::RoomRedaction,
            "m.room.pinned_events" => EventType::RoomPinnedEvents,
            "m.room.tombstone" => EventType::RoomTombstone,
            "m.sticker" => EventType::Sticker,
            "m.tag" => EventType::Tag,
            "m.push_rules" => EventType::PushRules,
            _ => {
                debug!("unrecognized event type: {}", s);
                EventType::Unsupported
            }
        }
    }

    /// Reads the `type` discriminator out of an event-shaped JSON object.
    pub fn from_json(obj: &JsonValue) -> Result<EventType, Error> {
        match obj.get("type") {
            Some(JsonValue::String(s)) => Ok(EventType::parse(s)),
            _ => Err(Error::missing("type", "Event")),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(de: D) -> Result<EventType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(de)?;
        Ok(EventType::parse(&s))
    }
}

/// The basic set of fields all events must have. `Content`'s schema is keyed
/// by the event type but opaque to this layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Event<C> {
    pub content: C,
    pub event_type: EventType,
}

impl<C: DeserializeOwned> Event<C> {
    pub fn from_json(obj: &JsonValue) -> Result<Event<C>, Error> {
        let (content, event_type) = envelope_fields(obj, "Event")?;
        Ok(Event {
            content,
            event_type,
        })
    }
}

impl<C: Serialize> Event<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        let obj = envelope_json(&self.content, self.event_type)?;
        Ok(JsonValue::Object(obj))
    }
}

/// Event as delivered over the to-device channel.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceEvent<C> {
    pub content: C,
    pub event_type: EventType,
    pub sender: String,
}

impl<C: DeserializeOwned> DeviceEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<DeviceEvent<C>, Error> {
        let shape = "DeviceEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(DeviceEvent {
            content,
            event_type,
            sender: string_field(obj, "sender", shape)?,
        })
    }
}

impl<C: Serialize> DeviceEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        let mut obj = envelope_json(&self.content, self.event_type)?;
        obj.insert("sender".into(), self.sender.clone().into());
        Ok(JsonValue::Object(obj))
    }
}

/// Reduced-fidelity state snapshot shown for rooms the user has been
/// invited to but not joined.
#[derive(Clone, Debug, PartialEq)]
pub struct StrippedEvent<C> {
    pub content: C,
    pub event_type: EventType,
    pub sender: String,
    pub state_key: String,
}

impl<C: DeserializeOwned> StrippedEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<StrippedEvent<C>, Error> {
        let shape = "StrippedEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(StrippedEvent {
            content,
            event_type,
            sender: string_field(obj, "sender", shape)?,
            state_key: string_field(obj, "state_key", shape)?,
        })
    }
}

impl<C: Serialize> StrippedEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        let mut obj = envelope_json(&self.content, self.event_type)?;
        obj.insert("sender".into(), self.sender.clone().into());
        obj.insert("state_key".into(), self.state_key.clone().into());
        Ok(JsonValue::Object(obj))
    }
}

pub(crate) fn envelope_fields<C: DeserializeOwned>(
    obj: &JsonValue,
    shape: &'static str,
) -> Result<(C, EventType), Error> {
    let content = match obj.get("content") {
        Some(c) => serde_json::from_value(c.clone())?,
        None => return Err(Error::missing("content", shape)),
    };
    let event_type = EventType::parse(&string_field(obj, "type", shape)?);
    Ok((content, event_type))
}

pub(crate) fn envelope_json<C: Serialize>(
    content: &C,
    event_type: EventType,
) -> Result<Map<String, JsonValue>, Error> {
    let mut obj = Map::new();
    obj.insert("content".into(), serde_json::to_value(content)?);
    // `Unsupported` has no wire name, so no `type` key is written.
    if event_type != EventType::Unsupported {
        obj.insert("type".into(), event_type.as_str().into());
    }
    Ok(obj)
}
