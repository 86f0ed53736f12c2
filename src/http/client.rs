//! Reqwest-backed signed transport — `DataApiHttp`.
//!
//! Every request is a `POST` with three form fields:
//!
//! - `security`: the signed security packet as JSON
//! - `request`: the request envelope as JSON
//! - `action`: `get`, `set`, `update` or `delete`

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::auth::{Action, SecurityPacket};
use crate::error::HttpError;
use crate::http::transport::{SignedTransport, TransportResponse};

/// HTTP transport for the Data API.
#[derive(Clone)]
pub struct DataApiHttp {
    client: Client,
}

impl DataApiHttp {
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Build the signed form fields for one request.
    pub fn form_fields(
        security: &SecurityPacket,
        secret: &str,
        body: &Value,
        action: Action,
    ) -> Result<[(&'static str, String); 3], HttpError> {
        let request_json = serde_json::to_string(body)?;
        let signed = security.sign(secret, Some(&request_json), action);
        let security_json = serde_json::to_string(&signed)?;

        Ok([
            ("security", security_json),
            ("request", request_json),
            ("action", action.as_str().to_string()),
        ])
    }
}

impl SignedTransport for DataApiHttp {
    async fn request(
        &self,
        url: &str,
        security: &SecurityPacket,
        secret: &str,
        body: &Value,
        action: Action,
    ) -> Result<TransportResponse, HttpError> {
        let fields = Self::form_fields(security, secret, body, action)?;

        tracing::trace!(%url, %action, "Posting signed form");

        let resp = self
            .client
            .post(url)
            .form(&fields)
            .send()
            .await
            .map_err(map_reqwest)?;
        let status_code = resp.status().as_u16();
        let text = resp.text().await.map_err(map_reqwest)?;

        Ok(TransportResponse { status_code, text })
    }
}

fn map_reqwest(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_form_fields_carry_signed_packet() {
        let packet = SecurityPacket::new("key")
            .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        let body = json!({"limit": 5});

        let [security, request, action] =
            DataApiHttp::form_fields(&packet, "secret", &body, Action::Get).unwrap();

        assert_eq!(security.0, "security");
        assert_eq!(request, ("request", r#"{"limit":5}"#.to_string()));
        assert_eq!(action, ("action", "get".to_string()));

        let signed: Value = serde_json::from_str(&security.1).unwrap();
        assert_eq!(signed["consumer_key"], "key");
        assert_eq!(signed["domain"], "localhost");
        assert_eq!(signed["timestamp"], "20240115-1030");
        let expected = crate::auth::generate_signature(
            &packet,
            "secret",
            Some(r#"{"limit":5}"#),
            Action::Get,
        );
        assert_eq!(signed["signature"], expected.as_str());
    }

    #[test]
    fn test_secret_is_not_sent() {
        let packet = SecurityPacket::new("key");
        let fields =
            DataApiHttp::form_fields(&packet, "top-secret", &json!({}), Action::Set).unwrap();
        assert!(fields.iter().all(|(_, value)| !value.contains("top-secret")));
    }
}
