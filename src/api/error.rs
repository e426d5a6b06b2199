use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Error payload shape the backend uses across endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

/// Normalized request-pipeline error.
///
/// `Auth` forces a session teardown and is not recoverable for the current
/// session; every other variant is surfaced to the caller for display and
/// leaves session state alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, no response received.
    #[error("{0}")]
    Network(String),
    /// HTTP 401.
    #[error("{message}")]
    Auth { message: String },
    /// Other 4xx, optionally carrying per-field messages for the form layer.
    #[error("{message}")]
    Validation {
        status: u16,
        message: String,
        fields: HashMap<String, String>,
        raw: Value,
    },
    /// 5xx.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        raw: Value,
    },
    /// Client-side failure: undecodable success body, storage access, ...
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth {
            message: msg.into(),
        }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network(_) | Self::Unexpected(_) => None,
            Self::Auth { .. } => Some(401),
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Validation { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    /// Whether the caller may retry/fix and resubmit without re-authenticating.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Auth { .. })
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message().into_view()
    }
}

/// Maps an HTTP status and the (possibly non-JSON) response payload onto the
/// error taxonomy. Statuses other than 401/4xx/5xx classes get no special
/// treatment beyond this mapping.
pub fn from_status_payload(status: u16, raw: Value) -> ApiError {
    let body: ErrorBody = serde_json::from_value(raw.clone()).unwrap_or_default();
    let message = body
        .message
        .or(body.error)
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    match status {
        401 => ApiError::Auth { message },
        400..=499 => ApiError::Validation {
            status,
            message,
            fields: body.errors,
            raw,
        },
        _ => ApiError::Server {
            status,
            message,
            raw,
        },
    }
}
