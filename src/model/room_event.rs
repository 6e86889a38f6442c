use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::Error;
use crate::model::event::{envelope_fields, envelope_json, EventType};
use crate::model::unsigned::UnsignedData;
use crate::model::{optional_string_field, string_field, u64_field};

/// An event that happened inside a room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomEvent<C> {
    pub content: C,
    pub event_type: EventType,
    /// The globally unique event identifier.
    pub event_id: String,
    /// The room this event belongs to. Empty when the event came from a
    /// context that implies the room (see `from_json`).
    pub room_id: String,
    /// Fully-qualified ID of the user who sent this event.
    pub sender: String,
    /// Timestamp in milliseconds on the originating homeserver when this
    /// event was sent.
    pub origin_server_ts: u64,
    // SPEC_BUG: The contents of unsigned_data are also present as top level
    // keys on some endpoints. Only the nested object is read here; the
    // duplicates are left to callers.
    pub unsigned_data: UnsignedData,
}

impl<C: DeserializeOwned> RoomEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<RoomEvent<C>, Error> {
        let shape = "RoomEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(RoomEvent {
            content,
            event_type,
            event_id: string_field(obj, "event_id", shape)?,
            // SPEC_BUG: not present in the state array returned by /sync.
            room_id: optional_string_field(obj, "room_id")?,
            sender: string_field(obj, "sender", shape)?,
            origin_server_ts: u64_field(obj, "origin_server_ts", shape)?,
            unsigned_data: unsigned_field(obj)?,
        })
    }
}

impl<C: Serialize> RoomEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::Object(self.room_event_json()?))
    }

    fn room_event_json(&self) -> Result<Map<String, JsonValue>, Error> {
        let mut obj = envelope_json(&self.content, self.event_type)?;
        if !self.room_id.is_empty() {
            obj.insert("room_id".into(), self.room_id.clone().into());
        }
        obj.insert("event_id".into(), self.event_id.clone().into());
        obj.insert("sender".into(), self.sender.clone().into());
        obj.insert("unsigned".into(), serde_json::to_value(&self.unsigned_data)?);
        obj.insert("origin_server_ts".into(), self.origin_server_ts.into());
        Ok(obj)
    }
}

/// A room event that sets or overwrites a piece of persistent room state.
/// `(event_type, state_key)` identify the piece of state being replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct StateEvent<C> {
    pub content: C,
    pub event_type: EventType,
    pub event_id: String,
    pub room_id: String,
    pub sender: String,
    pub origin_server_ts: u64,
    pub unsigned_data: UnsignedData,
    /// A unique key defining the overwriting semantics for this piece of
    /// room state.
    pub state_key: String,
}

impl<C: DeserializeOwned> StateEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<StateEvent<C>, Error> {
        let shape = "StateEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(StateEvent {
            content,
            event_type,
            event_id: string_field(obj, "event_id", shape)?,
            room_id: optional_string_field(obj, "room_id")?,
            sender: string_field(obj, "sender", shape)?,
            origin_server_ts: u64_field(obj, "origin_server_ts", shape)?,
            unsigned_data: unsigned_field(obj)?,
            state_key: string_field(obj, "state_key", shape)?,
        })
    }
}

impl<C: Serialize> StateEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        let mut obj = RoomEvent {
            content: &self.content,
            event_type: self.event_type,
            event_id: self.event_id.clone(),
            room_id: self.room_id.clone(),
            sender: self.sender.clone(),
            origin_server_ts: self.origin_server_ts,
            unsigned_data: self.unsigned_data.clone(),
        }
        .room_event_json()?;
        obj.insert("state_key".into(), self.state_key.clone().into());
        Ok(JsonValue::Object(obj))
    }
}

/// A room event removing another event from the room history.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactionEvent<C> {
    pub content: C,
    pub event_type: EventType,
    pub event_id: String,
    pub room_id: String,
    pub sender: String,
    pub origin_server_ts: u64,
    pub unsigned_data: UnsignedData,
    /// The event id of the event that was redacted.
    pub redacts: String,
}

impl<C: DeserializeOwned> RedactionEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<RedactionEvent<C>, Error> {
        let shape = "RedactionEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(RedactionEvent {
            content,
            event_type,
            event_id: string_field(obj, "event_id", shape)?,
            room_id: optional_string_field(obj, "room_id")?,
            sender: string_field(obj, "sender", shape)?,
            origin_server_ts: u64_field(obj, "origin_server_ts", shape)?,
            unsigned_data: unsigned_field(obj)?,
            redacts: string_field(obj, "redacts", shape)?,
        })
    }
}

impl<C: Serialize> RedactionEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        let mut obj = RoomEvent {
            content: &self.content,
            event_type: self.event_type,
            event_id: self.event_id.clone(),
            room_id: self.room_id.clone(),
            sender: self.sender.clone(),
            origin_server_ts: self.origin_server_ts,
            unsigned_data: self.unsigned_data.clone(),
        }
        .room_event_json()?;
        obj.insert("redacts".into(), self.redacts.clone().into());
        Ok(JsonValue::Object(obj))
    }
}

/// A room event whose content is an opaque encrypted payload. Adds nothing
/// to `RoomEvent` beyond the name.
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedEvent<C> {
    pub content: C,
    pub event_type: EventType,
    pub event_id: String,
    pub room_id: String,
    pub sender: String,
    pub origin_server_ts: u64,
    pub unsigned_data: UnsignedData,
}

impl<C: DeserializeOwned> EncryptedEvent<C> {
    pub fn from_json(obj: &JsonValue) -> Result<EncryptedEvent<C>, Error> {
        let shape = "EncryptedEvent";
        let (content, event_type) = envelope_fields(obj, shape)?;
        Ok(EncryptedEvent {
            content,
            event_type,
            event_id: string_field(obj, "event_id", shape)?,
            room_id: optional_string_field(obj, "room_id")?,
            sender: string_field(obj, "sender", shape)?,
            origin_server_ts: u64_field(obj, "origin_server_ts", shape)?,
            unsigned_data: unsigned_field(obj)?,
        })
    }
}

impl<C: Serialize> EncryptedEvent<C> {
    pub fn to_json(&self) -> Result<JsonValue, Error> {
        RoomEvent {
            content: &self.content,
            event_type: self.event_type,
            event_id: self.event_id.clone(),
            room_id: self.room_id.clone(),
            sender: self.sender.clone(),
            origin_server_ts: self.origin_server_ts,
            unsigned_data: self.unsigned_data.clone(),
        }
        .to_json()
    }
}

fn unsigned_field(obj: &JsonValue) -> Result<UnsignedData, Error> {
    match obj.get("unsigned") {
        Some(u) => Ok(serde_json::from_value(u.clone())?),
        None => Ok(UnsignedData::default()),
    }
}
