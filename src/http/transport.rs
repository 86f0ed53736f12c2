//! Transport contract consumed by the dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{Action, SecurityPacket};
use crate::error::HttpError;

/// Signs a request with the security packet and sends it to a Data API endpoint.
///
/// Implementations own signing and transmission. They must not retry.
#[allow(async_fn_in_trait)]
pub trait SignedTransport {
    async fn request(
        &self,
        url: &str,
        security: &SecurityPacket,
        secret: &str,
        body: &Value,
        action: Action,
    ) -> Result<TransportResponse, HttpError>;
}

/// Raw HTTP result handed back by a [`SignedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status_code: u16,
    pub text: String,
}

impl TransportResponse {
    pub fn new(status_code: u16, text: impl Into<String>) -> Self {
        Self {
            status_code,
            text: text.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }
}
