//! Unified error types for the service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::upstream::Upstream;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client construction error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from a single outbound call.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with something other than 200 OK.
    #[error("{upstream} api returned HTTP {status}")]
    Status {
        /// Which upstream was called.
        upstream: Upstream,
        /// Status code it returned.
        status: StatusCode,
    },

    /// Request never produced a response (DNS, connect, timeout).
    #[error("{upstream} api unreachable: {source}")]
    Transport {
        /// Which upstream was called.
        upstream: Upstream,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode {upstream} api response: {source}")]
    Decode {
        /// Which upstream was called.
        upstream: Upstream,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Decoded payload lacks a field the route needs.
    #[error("{upstream} api response has no string {field:?}")]
    MissingField {
        /// Which upstream was called.
        upstream: Upstream,
        /// Name of the missing field.
        field: &'static str,
    },
}

impl UpstreamError {
    /// Upstream this error came from.
    pub fn upstream(&self) -> Upstream {
        match self {
            Self::Status { upstream, .. }
            | Self::Transport { upstream, .. }
            | Self::Decode { upstream, .. }
            | Self::MissingField { upstream, .. } => *upstream,
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } | Self::MissingField { .. } => "decode",
        }
    }
}

/// Body returned when an upstream reports failure.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Fixed, upstream-specific message.
    pub error: String,
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            Self::Status { upstream, status } => {
                let body = ErrorResponse {
                    error: upstream.failure_message().to_string(),
                };
                (status, Json(body)).into_response()
            }
            // Transport, decode and missing-field faults are not reshaped into a JSON error.
            // The caller sees a bare 500, as for any unhandled fault.
            err => {
                error!(upstream = %err.upstream(), error = %err, "Unhandled upstream fault");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
