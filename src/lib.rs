//! # lrn-cli
//!
//! A thin client for the Learnosity Data API.
//!
//! ## Architecture
//!
//! 1. **Endpoint** — expands REST paths into full URLs (`endpoint`, `network`)
//! 2. **Auth** — security packet and request signature (`auth`)
//! 3. **HTTP** — `SignedTransport` seam plus the reqwest `DataApiHttp`
//! 4. **Dispatch** — sends a request envelope and validates the reply envelope
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lrn_cli::prelude::*;
//!
//! let config = DataApiConfig::new("consumer_key", "consumer_secret");
//! let dispatcher = Dispatcher::new(&config, DataApiHttp::new()?);
//! let url = config.endpoint("itembank/items");
//! let ok = dispatcher
//!     .dispatch(&url, &serde_json::json!({"limit": 1}), Action::Get, &mut std::io::stdout())
//!     .await;
//! ```

/// Network URL constants.
pub mod network;

/// Endpoint URL normalization.
pub mod endpoint;

/// Error types.
pub mod error;

/// Security packet, actions, signing.
pub mod auth;

/// Signed transport seam and HTTP client.
pub mod http;

/// Explicit client configuration.
pub mod config;

/// Request dispatch and response envelope checks.
pub mod dispatch;

/// Tracing subscriber construction.
pub mod logging;

pub mod prelude {
    pub use crate::auth::{Action, SecurityPacket};
    pub use crate::config::DataApiConfig;
    pub use crate::dispatch::{Dispatcher, ResponseEnvelope};
    pub use crate::endpoint::normalize_endpoint;
    pub use crate::error::{CliError, HttpError};
    #[cfg(feature = "http")]
    pub use crate::http::DataApiHttp;
    pub use crate::http::{SignedTransport, TransportResponse};
    pub use crate::network::{DEFAULT_API_DATA_HOST, DEFAULT_API_DATA_VERSION};
}
