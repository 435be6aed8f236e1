//! MCP method handler for the chromehist JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches the MCP lifecycle and tool methods; the
//! `history` tool itself is sequenced by [`run_history_tool`].

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::app::App;
use crate::database::{build_query, query_snapshot};
use crate::services::formatter::format_records;
use crate::services::path_resolver::resolve_history_path;
use crate::services::snapshot::Snapshot;
use crate::types::history::HistoryFilter;

/// MCP protocol revision this server implements.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Response when the resolved history file does not exist.
pub const HISTORY_NOT_FOUND_MESSAGE: &str = "Chrome history file not found.";

/// Prefix for data-access failures reported back as tool text.
pub const QUERY_ERROR_PREFIX: &str = "Error querying history: ";

/// JSON-RPC error produced by a method handler.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method),
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: message.into(),
        }
    }
}

/// Dispatches an MCP method call.
///
/// Tool failures never surface here: the `history` tool reports its own
/// errors as response text, so the transport only sees protocol-level
/// errors (unknown method, malformed arguments).
pub fn handle_method(app: &App, method: &str, params: &Value) -> Result<Value, RpcError> {
    debug!("dispatching method: {}", method);

    match method {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": "chromehist",
                "version": env!("CARGO_PKG_VERSION")
            }
        })),
        "notifications/initialized" | "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        "tools/list" => Ok(json!({ "tools": [history_tool_schema()] })),
        "tools/call" => {
            let name = params
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| RpcError::invalid_params("missing 'name' parameter"))?;
            if name != "history" {
                return Err(RpcError::invalid_params(format!("unknown tool: {}", name)));
            }
            let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
            let filter: HistoryFilter = serde_json::from_value(arguments)
                .map_err(|e| RpcError::invalid_params(format!("invalid arguments: {}", e)))?;
            let text = run_history_tool(app, &filter);
            Ok(json!({
                "content": [{ "type": "text", "text": text }]
            }))
        }

        _ => Err(RpcError::method_not_found(method)),
    }
}

/// Declared input schema of the `history` tool, as served by `tools/list`.
fn history_tool_schema() -> Value {
    json!({
        "name": "history",
        "description": "Query the local Chrome browsing history. Filters by keywords, \
                        date range, and visit count; returns a plain-text summary.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Whitespace-separated keywords; each must match the title or URL"
                },
                "start_date": {
                    "type": "string",
                    "description": "Earliest visit time (RFC 3339 or YYYY-MM-DD); invalid values are ignored"
                },
                "end_date": {
                    "type": "string",
                    "description": "Latest visit time (RFC 3339 or YYYY-MM-DD); invalid values are ignored"
                },
                "min_visit_count": { "type": "integer", "minimum": 0 },
                "max_visit_count": { "type": "integer", "minimum": 0 },
                "limit": { "type": "integer", "minimum": 0, "default": 30 },
                "offset": { "type": "integer", "minimum": 0, "default": 0 }
            }
        }
    })
}

/// Runs one `history` tool invocation: resolve, snapshot, query, format.
///
/// Every failure is terminal for the invocation and reported as text; the
/// snapshot directory is removed on all paths (by `close` on the normal
/// path, by drop if the copy itself failed).
pub fn run_history_tool(app: &App, filter: &HistoryFilter) -> String {
    let path = resolve_history_path(app.history_path_override.as_deref(), app.home_dir.as_deref());
    if !path.exists() {
        return HISTORY_NOT_FOUND_MESSAGE.to_string();
    }

    let snapshot = match Snapshot::acquire(&path) {
        Ok(snapshot) => snapshot,
        Err(e) => return format!("{}{}", QUERY_ERROR_PREFIX, e),
    };

    let statement = build_query(filter);
    let result = query_snapshot(snapshot.path(), &statement);

    if let Err(e) = snapshot.close() {
        warn!("failed to remove history snapshot: {}", e);
    }

    match result {
        Ok(records) => format_records(&records),
        Err(e) => format!("{}{}", QUERY_ERROR_PREFIX, e),
    }
}
