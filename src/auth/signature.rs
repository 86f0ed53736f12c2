//! Request signature for the Data API security packet.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{Action, SecurityPacket};

/// `strftime` layout of the packet timestamp (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// A security packet with its signature, as serialized into the `security` form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedSecurityPacket {
    #[serde(flatten)]
    pub packet: SecurityPacket,
    pub signature: String,
}

/// Hex SHA-256 over the `_`-joined signing values.
///
/// Order: consumer key, domain, timestamp, user id (if any), secret,
/// request JSON (if any), action.
pub fn generate_signature(
    packet: &SecurityPacket,
    secret: &str,
    request_json: Option<&str>,
    action: Action,
) -> String {
    let mut values: Vec<&str> = vec![
        packet.consumer_key.as_str(),
        packet.domain.as_str(),
        packet.timestamp.as_deref().unwrap_or_default(),
    ];
    if let Some(user_id) = packet.user_id.as_deref() {
        values.push(user_id);
    }
    values.push(secret);
    if let Some(request) = request_json {
        values.push(request);
    }
    values.push(action.as_str());

    hex::encode(Sha256::digest(values.join("_").as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn packet() -> SecurityPacket {
        SecurityPacket::new("yis0TYCu7U9V4o7M")
            .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    }

    fn sha256_hex(input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }

    #[test]
    fn test_signature_joins_values_in_order() {
        let signature = generate_signature(&packet(), "secret", Some(r#"{"limit":1}"#), Action::Get);
        let expected = sha256_hex(r#"yis0TYCu7U9V4o7M_localhost_20240115-1030_secret_{"limit":1}_get"#);
        assert_eq!(signature, expected);
    }

    #[test]
    fn test_signature_includes_user_id_before_secret() {
        let packet = packet().with_user_id("student_1");
        let signature = generate_signature(&packet, "secret", None, Action::Set);
        let expected = sha256_hex("yis0TYCu7U9V4o7M_localhost_20240115-1030_student_1_secret_set");
        assert_eq!(signature, expected);
    }

    #[test]
    fn test_signature_is_deterministic_and_action_sensitive() {
        let a = generate_signature(&packet(), "secret", None, Action::Get);
        let b = generate_signature(&packet(), "secret", None, Action::Get);
        let c = generate_signature(&packet(), "secret", None, Action::Delete);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_signed_packet_serializes_flat() {
        let signed = packet().sign("secret", None, Action::Get);
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["consumer_key"], "yis0TYCu7U9V4o7M");
        assert_eq!(json["timestamp"], "20240115-1030");
        assert_eq!(json["signature"], signed.signature.as_str());
        assert!(json.get("packet").is_none());
    }
}
