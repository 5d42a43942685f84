//! Backend request and response shapes.
//!
//! The admin core never performs HTTP itself — it builds an `ApiRequest`
//! and hands it to whatever `ApiClient` the host wires in. The response
//! envelope mirrors the backend's `{ success, message, data }` convention.

use serde::{Deserialize, Serialize};

/// The HTTP method of a backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// One request to the backend REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the API root, e.g. "/doctor/42".
    pub path: String,
    /// JSON body; `Null` for body-less requests.
    pub body: serde_json::Value,
}

/// The backend's uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the backend accepted the operation.
    pub success: bool,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: String,
    /// Operation-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// A minimal success envelope, used by tests and mocks.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    /// A minimal failure envelope, used by tests and mocks.
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }
}
