//! Explicit client configuration, built once per invocation.

use crate::auth::{SecurityPacket, DEFAULT_DOMAIN};
use crate::endpoint::normalize_endpoint;
use crate::network::{DEFAULT_API_DATA_HOST, DEFAULT_API_DATA_VERSION};

/// Host, version and credentials for talking to the Data API.
///
/// Carries no credential defaults; callers pass the consumer explicitly.
#[derive(Clone)]
pub struct DataApiConfig {
    host: String,
    version: String,
    consumer_key: String,
    consumer_secret: String,
    domain: String,
}

impl DataApiConfig {
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            host: DEFAULT_API_DATA_HOST.to_string(),
            version: DEFAULT_API_DATA_VERSION.to_string(),
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.trim_matches('/').to_string();
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// Fully qualified URL for `endpoint_url` against this host and version.
    pub fn endpoint(&self, endpoint_url: &str) -> String {
        normalize_endpoint(endpoint_url, &self.host, &self.version)
    }

    /// A fresh security packet for one request.
    pub fn security_packet(&self) -> SecurityPacket {
        SecurityPacket::new(&self.consumer_key).with_domain(&self.domain)
    }
}

impl std::fmt::Debug for DataApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataApiConfig")
            .field("host", &self.host)
            .field("version", &self.version)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DataApiConfig::new("key", "secret");
        assert_eq!(
            config.endpoint("itembank/items"),
            "https://data.learnosity.com/v1/itembank/items"
        );
        let packet = config.security_packet();
        assert_eq!(packet.consumer_key, "key");
        assert_eq!(packet.domain, "localhost");
        assert_eq!(config.consumer_secret(), "secret");
    }

    #[test]
    fn test_overrides_trim_separators() {
        let config = DataApiConfig::new("key", "secret")
            .host("https://data-va.learnosity.com/")
            .version("/v2023.1.LTS/")
            .domain("example.com");
        assert_eq!(
            config.endpoint("/itembank/items"),
            "https://data-va.learnosity.com/v2023.1.LTS/itembank/items"
        );
        assert_eq!(config.security_packet().domain, "example.com");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = DataApiConfig::new("key", "74c5fd430cf1242a527f6223aebd42d30464be22");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("74c5fd43"));
    }
}
