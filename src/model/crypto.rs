use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Response to uploading one-time keys for a device.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UploadKeys {
    /// Number of unclaimed one-time keys currently held on the server,
    /// per key algorithm.
    pub one_time_key_counts: HashMap<String, u32>,
}

/// Response to querying the identity keys of other devices.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct QueryKeys {
    /// Homeservers that could not be reached, keyed by server name.
    pub failures: HashMap<String, JsonValue>,
    /// Device keys per user, then per device id. The per-device payload is
    /// signed JSON and stays untyped here.
    pub device_keys: HashMap<String, HashMap<String, JsonValue>>,
}

/// Response to claiming one-time keys for starting encrypted sessions.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ClaimKeys {
    pub failures: HashMap<String, JsonValue>,
    /// Claimed keys per user, then per device id.
    pub one_time_keys: HashMap<String, HashMap<String, JsonValue>>,
}

/// Users whose device lists changed between two sync tokens.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct KeyChanges {
    pub changed: Vec<String>,
    pub left: Vec<String>,
}

/// An encrypted session key as stored in the server-side key backup.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EncryptedSessionData {
    /// Unpadded base64 ephemeral curve25519 key.
    pub ephemeral: String,
    /// Ciphertext of the session payload, unpadded base64.
    pub ciphertext: String,
    /// First 8 bytes of the payload MAC, unpadded base64.
    pub mac: String,
}

/// One backed-up megolm session.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SessionBackup {
    pub first_message_index: i64,
    pub forwarded_count: i64,
    pub is_verified: bool,
    pub session_data: EncryptedSessionData,
}

/// All backed-up sessions of a single room, keyed by session id.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RoomKeysBackup {
    pub sessions: HashMap<String, SessionBackup>,
}

/// The full key backup, keyed by room id.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct KeysBackup {
    pub rooms: HashMap<String, RoomKeysBackup>,
}

/// Metadata about a key backup version.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BackupVersion {
    pub algorithm: String,
    /// Algorithm-dependent auth data, opaque at this layer.
    pub auth_data: JsonValue,
    /// Number of keys stored in this backup.
    pub count: u64,
    /// Opaque change counter. Stored as a string even when the server sends
    /// an integer (synapse 1.15.1 and older do).
    #[serde(deserialize_with = "crate::de::etag::deserialize")]
    pub etag: String,
    pub version: String,
}

/// The decrypted payload of a backed-up session key.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SessionData {
    pub algorithm: String,
    pub forwarding_curve25519_key_chain: Vec<String>,
    pub sender_key: String,
    pub sender_claimed_keys: HashMap<String, String>,
    pub session_key: String,
}
