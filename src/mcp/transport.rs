//! JSON-RPC 2.0 message types carried over stdio.
//!
//! Each message is one line of JSON. Requests without an `id` are
//! notifications and never receive a response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version string used on every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// An incoming JSON-RPC 2.0 request or notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version; expected to be `"2.0"`.
    pub jsonrpc: String,
    /// Number, string, or null. Absent (null) for notifications.
    #[serde(default)]
    pub id: Value,
    /// Method name, e.g. `tools/call`.
    pub method: String,
    /// Method parameters, if any.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Returns `true` if this message expects no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

/// An outgoing JSON-RPC 2.0 response. Exactly one of `result` and `error`
/// is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version; always `"2.0"`.
    pub jsonrpc: String,
    /// Id of the request being answered; null for parse errors.
    pub id: Value,
    /// Method result on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error details on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Builds a success response for the given request id.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds an error response for the given request id.
    pub fn error(id: Value, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: code.as_i32(),
                message: message.into(),
                data: None,
            }),
        }
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric code from [`ErrorCode`].
    pub code: i32,
    /// Human-readable description.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC 2.0 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The line was not valid JSON (or not valid UTF-8).
    ParseError,
    /// The JSON was not a valid request object.
    InvalidRequest,
    /// No handler exists for the method.
    MethodNotFound,
    /// Missing or mistyped parameters, including unknown tool names.
    InvalidParams,
    /// A handler failed, e.g. on a filesystem error.
    InternalError,
}

impl ErrorCode {
    /// Returns the numeric code defined by JSON-RPC 2.0.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}
