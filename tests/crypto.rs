use serde_json::json;

use matrix_events::model::crypto::{
    BackupVersion, ClaimKeys, EncryptedSessionData, KeyChanges, KeysBackup, QueryKeys,
    SessionBackup, SessionData, UploadKeys,
};

#[test]
fn upload_keys() {
    let response: UploadKeys = serde_json::from_value(json!({
        "one_time_key_counts": {"curve25519": 10, "signed_curve25519": 20}
    }))
    .unwrap();
    assert_eq!(response.one_time_key_counts["signed_curve25519"], 20);

    // every field is required
    let missing: Result<UploadKeys, _> = serde_json::from_value(json!({}));
    assert!(missing.is_err());
}

#[test]
fn query_keys() {
    let response: QueryKeys = serde_json::from_value(json!({
        "failures": {"bad.example.com": {"errcode": "M_UNKNOWN"}},
        "device_keys": {
            "@alice:example.com": {
                "JLAFKJWSCS": {
                    "user_id": "@alice:example.com",
                    "device_id": "JLAFKJWSCS",
                    "algorithms": ["m.olm.v1.curve25519-aes-sha2"]
                }
            }
        }
    }))
    .unwrap();
    let device = &response.device_keys["@alice:example.com"]["JLAFKJWSCS"];
    assert_eq!(device["device_id"], "JLAFKJWSCS");
    assert!(response.failures.contains_key("bad.example.com"));

    let missing: Result<QueryKeys, _> = serde_json::from_value(json!({"failures": {}}));
    assert!(missing.is_err());
}

#[test]
fn claim_keys() {
    let response: ClaimKeys = serde_json::from_value(json!({
        "failures": {},
        "one_time_keys": {
            "@alice:example.com": {
                "JLAFKJWSCS": {"signed_curve25519:AAAAHg": {"key": "zKbLg..."}}
            }
        }
    }))
    .unwrap();
    assert!(response.failures.is_empty());
    assert!(response.one_time_keys["@alice:example.com"].contains_key("JLAFKJWSCS"));
}

#[test]
fn key_changes() {
    let response: KeyChanges = serde_json::from_value(json!({
        "changed": ["@alice:example.com"],
        "left": []
    }))
    .unwrap();
    assert_eq!(response.changed, vec!["@alice:example.com"]);
    assert!(response.left.is_empty());

    let missing: Result<KeyChanges, _> =
        serde_json::from_value(json!({"changed": ["@alice:example.com"]}));
    assert!(missing.is_err());
}

#[test]
fn backup_version_etag_as_integer() {
    // synapse 1.15.1 and older send etag as an integer
    let version: BackupVersion = serde_json::from_value(json!({
        "algorithm": "m.megolm_backup.v1.curve25519-aes-sha2",
        "auth_data": {"public_key": "abcdefg"},
        "count": 42,
        "etag": 7,
        "version": "1"
    }))
    .unwrap();
    assert_eq!(version.etag, "7");
    assert_eq!(version.count, 42);
    assert_eq!(version.auth_data["public_key"], "abcdefg");
}

#[test]
fn backup_version_etag_as_string() {
    let version: BackupVersion = serde_json::from_value(json!({
        "algorithm": "m.megolm_backup.v1.curve25519-aes-sha2",
        "auth_data": {},
        "count": 0,
        "etag": "anopaquestring",
        "version": "2"
    }))
    .unwrap();
    assert_eq!(version.etag, "anopaquestring");

    // encode writes every field, etag included
    let encoded = serde_json::to_value(&version).unwrap();
    assert_eq!(encoded["etag"], "anopaquestring");
    assert_eq!(encoded["count"], 0);
}

#[test]
fn keys_backup_nesting() {
    let backup: KeysBackup = serde_json::from_value(json!({
        "rooms": {
            "!room:example.com": {
                "sessions": {
                    "sessionid1": {
                        "first_message_index": 1,
                        "forwarded_count": 0,
                        "is_verified": true,
                        "session_data": {
                            "ephemeral": "base64+ephemeral+key",
                            "ciphertext": "base64+ciphertext+of+JSON+data",
                            "mac": "base64+mac+of+ciphertext"
                        }
                    }
                }
            }
        }
    }))
    .unwrap();
    let session = &backup.rooms["!room:example.com"].sessions["sessionid1"];
    assert_eq!(session.first_message_index, 1);
    assert!(session.is_verified);
    assert_eq!(session.session_data.mac, "base64+mac+of+ciphertext");
}

#[test]
fn session_backup_encode_writes_all_fields() {
    let session = SessionBackup {
        first_message_index: 3,
        forwarded_count: 2,
        is_verified: false,
        session_data: EncryptedSessionData {
            ephemeral: "e".to_string(),
            ciphertext: "c".to_string(),
            mac: "m".to_string(),
        },
    };
    let encoded = serde_json::to_value(&session).unwrap();
    assert_eq!(
        encoded,
        json!({
            "first_message_index": 3,
            "forwarded_count": 2,
            "is_verified": false,
            "session_data": {"ephemeral": "e", "ciphertext": "c", "mac": "m"}
        })
    );
}

#[test]
fn session_data_round_trip() {
    let input = json!({
        "algorithm": "m.megolm.v1.aes-sha2",
        "forwarding_curve25519_key_chain": ["hPQNcabIABgGnx3/ACv/jmMmiQHoeFfuLB17tzWp6Hw"],
        "sender_key": "RF3s+E7RkTQTGF2d8Deol0FkQvgII2aJDf3/Jp5mxVU",
        "sender_claimed_keys": {"ed25519": "aj40p+aw64yPIdsxoog8jhPu9i7l7NcFRecuOQblE3Y"},
        "session_key": "AgAAAADxKHa9uFxcXzwYoNueL5Xqi69IkD4sni8Llf..."
    });
    let data: SessionData = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(data.algorithm, "m.megolm.v1.aes-sha2");
    assert_eq!(data.forwarding_curve25519_key_chain.len(), 1);
    assert_eq!(serde_json::to_value(&data).unwrap(), input);
}
