//! Uniform response envelope
//!
//! Every API outcome is written to the client as
//!
//! ```json
//! {
//!   "message": "Users list",
//!   "meta": { "timestamp": "...", "path": "/api/v1/users", "processingTimeMs": 0 },
//!   "data": [ ... ]
//! }
//! ```
//!
//! `data` is omitted entirely when no payload was supplied. `processingTimeMs`
//! is present only when the envelope recorded a start time at construction.

use std::time::Instant;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod channel;

pub use channel::ResponseChannel;

const SERIALIZATION_FAILURE_MESSAGE: &str = "failed to serialize response";

/// Outcome codes an envelope can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ResponseStatus {
    Success = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    InternalError = 500,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            ResponseStatus::Success => StatusCode::OK,
            ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
            ResponseStatus::Unauthorized => StatusCode::UNAUTHORIZED,
            ResponseStatus::Forbidden => StatusCode::FORBIDDEN,
            ResponseStatus::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ResponseStatus> for StatusCode {
    fn from(status: ResponseStatus) -> Self {
        status.status_code()
    }
}

/// Request context and timing attached to every envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// ISO-8601 time the response was written
    #[schema(example = "2025-04-28T20:15:40.000Z")]
    pub timestamp: String,

    /// Original request path, including the query string
    #[schema(example = "/api/v1/users")]
    pub path: String,

    /// Milliseconds between envelope construction and send
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 32)]
    pub processing_time_ms: Option<u64>,
}

impl Meta {
    /// Capture metadata at send time.
    pub fn capture(path: impl Into<String>, started_at: Option<Instant>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: path.into(),
            processing_time_ms: started_at.map(|start| start.elapsed().as_millis() as u64),
        }
    }
}

#[derive(Serialize)]
struct WireBody<'a, T> {
    message: &'a str,
    meta: &'a Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
}

/// Base envelope: any status, message, optional payload and optional start time.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    status: ResponseStatus,
    message: String,
    data: Option<T>,
    started_at: Option<Instant>,
}

impl<T> Envelope<T> {
    pub fn new(
        status: ResponseStatus,
        message: impl Into<String>,
        data: Option<T>,
        started_at: Option<Instant>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            data,
            started_at,
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}

impl<T: Serialize> Envelope<T> {
    /// Write the envelope to `channel` and finalize the response.
    pub fn send(self, channel: ResponseChannel) -> Response {
        self.send_with_headers(channel, std::iter::empty::<(&str, &str)>())
    }

    /// Write the envelope to `channel`, appending each extra header first.
    ///
    /// Headers already on the channel are kept; a name given here that is
    /// already present gains an additional value. Pairs that are not valid
    /// HTTP headers are skipped.
    pub fn send_with_headers<I, K, V>(
        self,
        mut channel: ResponseChannel,
        extra_headers: I,
    ) -> Response
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in extra_headers {
            let (name, value) = (name.as_ref(), value.as_ref());
            if !channel.append_raw_header(name, value) {
                tracing::warn!(header = %name, "Skipping invalid response header");
            }
        }

        let (path, mut headers) = channel.into_parts();
        let meta = Meta::capture(path, self.started_at);

        let body = WireBody {
            message: &self.message,
            meta: &meta,
            data: self.data.as_ref(),
        };

        let (status, bytes) = match serde_json::to_vec(&body) {
            Ok(bytes) => (self.status, bytes),
            Err(err) => {
                tracing::error!(error = %err, path = %meta.path, "Failed to serialize response payload");
                let fallback = WireBody::<()> {
                    message: SERIALIZATION_FAILURE_MESSAGE,
                    meta: &meta,
                    data: None,
                };
                (
                    ResponseStatus::InternalError,
                    serde_json::to_vec(&fallback).unwrap_or_default(),
                )
            }
        };

        headers
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));

        tracing::debug!(
            status = status.code(),
            path = %meta.path,
            processing_time_ms = ?meta.processing_time_ms,
            "Response sent"
        );

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status.status_code();
        *response.headers_mut() = headers;
        response
    }
}

/// Built-in outcome variants.
#[derive(Debug, Clone)]
pub enum ApiResponse<T> {
    /// Status 200 with an optional payload
    Success {
        message: String,
        data: Option<T>,
        started_at: Instant,
    },
    /// Status 400, never carries a payload
    Failure { message: String, started_at: Instant },
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        ApiResponse::Success {
            message: message.into(),
            data,
            started_at: Instant::now(),
        }
    }

    pub fn status(&self) -> ResponseStatus {
        match self {
            ApiResponse::Success { .. } => ResponseStatus::Success,
            ApiResponse::Failure { .. } => ResponseStatus::BadRequest,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiResponse::Success { message, .. } | ApiResponse::Failure { message, .. } => message,
        }
    }

    pub fn into_envelope(self) -> Envelope<T> {
        let status = self.status();
        match self {
            ApiResponse::Success {
                message,
                data,
                started_at,
            } => Envelope::new(status, message, data, Some(started_at)),
            ApiResponse::Failure {
                message,
                started_at,
            } => Envelope::new(status, message, None, Some(started_at)),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
            started_at: Instant::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn send(self, channel: ResponseChannel) -> Response {
        self.into_envelope().send(channel)
    }

    pub fn send_with_headers<I, K, V>(self, channel: ResponseChannel, extra_headers: I) -> Response
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.into_envelope().send_with_headers(channel, extra_headers)
    }
}

impl<T> From<ApiResponse<T>> for Envelope<T> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_envelope()
    }
}
