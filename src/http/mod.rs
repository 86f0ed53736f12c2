//! HTTP layer — the signed-transport seam and its reqwest implementation.

pub mod transport;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::DataApiHttp;
pub use transport::{SignedTransport, TransportResponse};
