//! Endpoint normalization — expands REST paths into full Data API URLs.
//!
//! Accepted forms:
//!
//! - a full URL: `https://data.learnosity.com/v1/itembank/items`
//! - a REST path with a version: `/v1/itembank/items`
//! - a REST path without a version, with or without the leading slash:
//!   `/itembank/items`, `itembank/items`

/// Expand `endpoint_url` into a fully qualified URL.
///
/// Anything starting with `http` is returned as-is. Paths get a leading `/`,
/// then `/<version>` unless they already start with `/v`, then the host.
///
/// Normalizing an already normalized *path* is not idempotent, but a full URL
/// never reaches the path branch.
pub fn normalize_endpoint(endpoint_url: &str, host: &str, version: &str) -> String {
    if endpoint_url.starts_with("http") {
        return endpoint_url.to_string();
    }

    let mut path = if endpoint_url.starts_with('/') {
        endpoint_url.to_string()
    } else {
        format!("/{}", endpoint_url)
    };

    if !path.starts_with("/v") {
        path = format!("/{}{}", version, path);
    }

    format!("{}{}", host, path)
}
