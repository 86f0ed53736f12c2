//! Authentication — security packets and request signing.
//!
//! ## Security Model
//!
//! - The consumer secret never leaves the process. It is only folded into the
//!   request signature computed in [`signature`].
//! - A [`SecurityPacket`] is built fresh for every invocation and never persisted.
//! - The packet timestamp is stamped at signing time unless the caller pinned one.

pub mod signature;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use signature::{generate_signature, SignedSecurityPacket, TIMESTAMP_FORMAT};

/// Domain reported in the security packet when none is configured.
pub const DEFAULT_DOMAIN: &str = "localhost";

// ============================================================================
// Security packet
// ============================================================================

/// Signing metadata sent alongside a Data API request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityPacket {
    pub consumer_key: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SecurityPacket {
    pub fn new(consumer_key: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            timestamp: None,
            user_id: None,
        }
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    /// Pin the timestamp instead of stamping it at signing time.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    /// Sign the packet for one request.
    ///
    /// `request_json` is the exact serialized request body that goes on the wire.
    pub fn sign(&self, secret: &str, request_json: Option<&str>, action: Action) -> SignedSecurityPacket {
        let mut packet = self.clone();
        if packet.timestamp.is_none() {
            packet.timestamp = Some(Utc::now().format(TIMESTAMP_FORMAT).to_string());
        }
        let signature = generate_signature(&packet, secret, request_json, action);
        SignedSecurityPacket { packet, signature }
    }
}

// ============================================================================
// Action
// ============================================================================

/// Data API action sent with every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Get,
    Set,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_security_packet_defaults_domain() {
        let packet = SecurityPacket::new("yis0TYCu7U9V4o7M");
        assert_eq!(packet.consumer_key, "yis0TYCu7U9V4o7M");
        assert_eq!(packet.domain, "localhost");
        assert!(packet.timestamp.is_none());
        assert!(packet.user_id.is_none());
    }

    #[test]
    fn test_security_packet_serialize_skips_unset_fields() {
        let packet = SecurityPacket::new("key").with_domain("example.com");
        let json = serde_json::to_value(&packet).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"consumer_key": "key", "domain": "example.com"})
        );
    }

    #[test]
    fn test_with_timestamp_formats_utc_minutes() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 59).unwrap();
        let packet = SecurityPacket::new("key").with_timestamp(at);
        assert_eq!(packet.timestamp.as_deref(), Some("20240307-0905"));
    }

    #[test]
    fn test_sign_stamps_missing_timestamp() {
        let signed = SecurityPacket::new("key").sign("secret", None, Action::Get);
        let timestamp = signed.packet.timestamp.expect("timestamp stamped");
        assert_eq!(timestamp.len(), "20240307-0905".len());
        assert_eq!(&timestamp[8..9], "-");
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(Action::default(), Action::Get);
        assert_eq!(serde_json::to_string(&Action::Update).unwrap(), r#""update""#);
        assert_eq!(Action::Delete.to_string(), "delete");
    }
}
