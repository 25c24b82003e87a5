//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

/// Build a full API URL from the backend origin and an endpoint path
///
/// # Arguments
/// * `base` - Backend origin, e.g. "http://localhost:8000"
/// * `path` - Endpoint path (should start with "/")
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("http://localhost:8000", "/upload-pdf");
/// assert_eq!(url, "http://localhost:8000/upload-pdf");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
