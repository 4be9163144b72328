//! MCP server that reads JSON-RPC 2.0 messages from stdin and writes
//! responses to stdout.
//!
//! Requests are handled one at a time in arrival order; the notes directory
//! is the only state shared between calls.

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, warn};

use crate::errors::{NotesError, Result};
use crate::store::NotesStore;

use super::tools::{get_tool_definitions, handle_tool_call};
use super::transport::{ErrorCode, JsonRpcRequest, JsonRpcResponse};

/// MCP protocol revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported to clients.
pub const SERVER_NAME: &str = "dev-notes";

fn parse_error(message: String) -> JsonRpcResponse {
    JsonRpcResponse::error(Value::Null, ErrorCode::ParseError, message)
}

/// The MCP server wrapping a `NotesStore`.
pub struct McpServer {
    store: NotesStore,
}

impl McpServer {
    /// Creates a new MCP server backed by the given store.
    pub fn new(store: NotesStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &NotesStore {
        &self.store
    }

    /// Serves requests from stdin until it is closed.
    pub async fn run(&self) -> Result<()> {
        self.run_with(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serves newline-delimited JSON-RPC from `reader`, writing one response
    /// line per request to `writer`. Returns when the reader hits EOF.
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => match serde_json::from_str::<JsonRpcRequest>(line.trim()) {
                    Ok(request) => self.handle_request(&request).await,
                    Err(e) => {
                        warn!(error = %e, "unparseable JSON-RPC message");
                        Some(parse_error(format!("failed to parse JSON-RPC request: {}", e)))
                    }
                },
                Err(e) => {
                    warn!(error = %e, "JSON-RPC message is not valid UTF-8");
                    Some(parse_error(format!("request is not valid UTF-8: {}", e)))
                }
            };

            if let Some(resp) = response {
                let mut output = serde_json::to_string(&resp)?;
                output.push('\n');
                writer.write_all(output.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        debug!("input closed, shutting down");
        Ok(())
    }

    /// Dispatches a parsed JSON-RPC request to the appropriate handler.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, id = %request.id, "request");
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(id)),
            "initialized" | "notifications/initialized" => None,
            "ping" => Some(JsonRpcResponse::success(id, json!({}))),
            "tools/list" => Some(JsonRpcResponse::success(
                id,
                json!({ "tools": get_tool_definitions() }),
            )),
            "tools/call" => Some(self.handle_tools_call(id, request.params.as_ref()).await),
            _ if request.is_notification() => None,
            _ => Some(JsonRpcResponse::error(
                id,
                ErrorCode::MethodNotFound,
                format!("method not found: {}", request.method),
            )),
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    async fn handle_tools_call(&self, id: Value, params: Option<&Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing params for tools/call",
            );
        };

        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing 'name' in tools/call params",
            );
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match handle_tool_call(&self.store, tool_name, arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e @ (NotesError::InvalidParams { .. } | NotesError::UnknownTool { .. })) => {
                warn!(tool = tool_name, error = %e, "rejected tool call");
                JsonRpcResponse::error(id, ErrorCode::InvalidParams, e.to_string())
            }
            Err(e) => {
                error!(tool = tool_name, error = %e, "tool execution failed");
                JsonRpcResponse::error(
                    id,
                    ErrorCode::InternalError,
                    format!("tool execution failed: {}", e),
                )
            }
        }
    }
}
