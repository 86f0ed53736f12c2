//! Network URL constants for the Data API.

/// Default Data API host.
pub const DEFAULT_API_DATA_HOST: &str = "https://data.learnosity.com";

/// Default Data API version segment.
pub const DEFAULT_API_DATA_VERSION: &str = "v1";
