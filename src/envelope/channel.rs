//! Per-request response channel

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{header::HeaderName, request::Parts, HeaderMap, HeaderValue, Uri},
};

/// Write-once handle for the response to a single request.
///
/// Extracted from the incoming request and consumed by
/// [`Envelope::send`](super::Envelope::send), so a handler can answer a request
/// at most once.
#[derive(Debug)]
pub struct ResponseChannel {
    path: String,
    headers: HeaderMap,
}

impl ResponseChannel {
    /// Create a channel for a request to `path` (path and query string).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a channel from a request URI, keeping the query string.
    pub fn from_uri(uri: &Uri) -> Self {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        Self::new(path)
    }

    /// Originating request path, including any query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Append a header, keeping any values already present under the same name.
    pub fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.append(name, value);
    }

    /// Append a header given as plain strings. Returns `false` and leaves the
    /// channel untouched when the pair is not a valid HTTP header.
    pub fn append_raw_header(&mut self, name: &str, value: &str) -> bool {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn into_parts(self) -> (String, HeaderMap) {
        (self.path, self.headers)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResponseChannel
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers strip their prefix from `parts.uri`
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);

        Ok(Self::from_uri(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extract_prefers_original_uri() {
        let request = Request::builder()
            .uri("/v1/users")
            .extension(OriginalUri("/api/v1/users?page=2".parse().unwrap()))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let channel = ResponseChannel::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(channel.path(), "/api/v1/users?page=2");
    }

    #[tokio::test]
    async fn test_extract_falls_back_to_request_uri() {
        let request = Request::builder()
            .uri("/api/v1/login?debug=1")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let channel = ResponseChannel::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(channel.path(), "/api/v1/login?debug=1");
    }

    #[test]
    fn test_append_raw_header_rejects_invalid_name() {
        let mut channel = ResponseChannel::new("/");
        assert!(!channel.append_raw_header("bad header", "value"));
        assert!(channel.append_raw_header("x-trace", "abc"));
        assert_eq!(channel.headers().len(), 1);
    }
}
