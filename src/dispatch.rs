//! Request dispatcher — sends one request envelope and interprets the reply.
//!
//! Every failure (transport error, non-200 status, `meta.status` false) is
//! logged at error level and collapses to `false`. Nothing is retried and
//! nothing is written to the output on the failure path.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io::{Read, Write};

use crate::auth::Action;
use crate::config::DataApiConfig;
use crate::error::CliError;
use crate::http::transport::{SignedTransport, TransportResponse};

// ============================================================================
// Response envelope
// ============================================================================

/// Envelope wrapped around every Data API reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub message: Option<Value>,
}

impl Meta {
    /// Whether `status` is truthy: `true`, a non-zero number, or a non-empty string.
    pub fn succeeded(&self) -> bool {
        match &self.status {
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
            Value::Null => false,
        }
    }

    /// `message` for a log line: strings as-is, anything else as JSON.
    pub fn message_text(&self) -> String {
        match &self.message {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Parse a request envelope from `reader`.
pub fn read_request<R: Read>(reader: R) -> Result<Value, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Extract `data` from a successful response.
///
/// The error describes the failure and is meant for the log line.
pub fn interpret_response(response: &TransportResponse) -> Result<Value, ResponseFailure> {
    if !response.is_ok() {
        return Err(ResponseFailure::Status {
            status: response.status_code,
            body: response.text.clone(),
        });
    }

    let envelope: ResponseEnvelope = response
        .json()
        .map_err(|e| ResponseFailure::Invalid(e.to_string()))?;

    if !envelope.meta.succeeded() {
        return Err(ResponseFailure::Api {
            message: envelope.meta.message_text(),
        });
    }

    Ok(envelope.data.unwrap_or(Value::Null))
}

/// Why a response was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFailure {
    /// Anything but 200.
    Status { status: u16, body: String },
    /// 200 with a body that is not a response envelope.
    Invalid(String),
    /// `meta.status` was falsy.
    Api { message: String },
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Sends request envelopes through a [`SignedTransport`].
pub struct Dispatcher<'a, T> {
    config: &'a DataApiConfig,
    transport: T,
}

impl<'a, T: SignedTransport> Dispatcher<'a, T> {
    pub fn new(config: &'a DataApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` to the already normalized `url` and write the returned
    /// `data` to `out` as indented JSON.
    ///
    /// Returns `true` only when the response passed every check and was written.
    pub async fn dispatch<W: Write>(
        &self,
        url: &str,
        request: &Value,
        action: Action,
        out: &mut W,
    ) -> bool {
        let security = self.config.security_packet();

        tracing::debug!(
            "Sending {} request to {} ...",
            action.as_str().to_uppercase(),
            url
        );

        let response = match self
            .transport
            .request(url, &security, self.config.consumer_secret(), request, action)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint = %url, "Exception sending request to {}: {}", url, e);
                return false;
            }
        };

        let data = match interpret_response(&response) {
            Ok(data) => data,
            Err(ResponseFailure::Status { status, body }) => {
                tracing::error!(
                    endpoint = %url,
                    status,
                    "Error {} sending request to {}: {}",
                    status,
                    url,
                    body
                );
                return false;
            }
            Err(ResponseFailure::Invalid(reason)) => {
                tracing::error!(endpoint = %url, "Invalid response from {}: {}", url, reason);
                return false;
            }
            Err(ResponseFailure::Api { message }) => {
                tracing::error!(
                    endpoint = %url,
                    "Incorrect status for request to {}: {}",
                    url,
                    message
                );
                return false;
            }
        };

        match write_data(out, &data) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(endpoint = %url, "Failed to write response data: {}", e);
                false
            }
        }
    }
}

/// Write `data` indented by one space per level, followed by a newline.
fn write_data<W: Write>(out: &mut W, data: &Value) -> Result<(), CliError> {
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b" "));
    data.serialize(&mut serializer)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
