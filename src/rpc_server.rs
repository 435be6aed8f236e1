//! chromehist MCP server — JSON-RPC 2.0 over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"jsonrpc":"2.0","id":1,"method":"tools/call","params":{...}}
//! Response: {"jsonrpc":"2.0","id":1,"result":{...}} or {"jsonrpc":"2.0","id":1,"error":{...}}
//!
//! Logging goes to stderr; stdout carries protocol frames only.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{error, info};

use chromehist::app::App;
use chromehist::rpc_handler::handle_method;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let app = App::from_env();
    info!(
        "chromehist MCP server starting, override={:?}",
        app.history_path_override
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                error!("invalid JSON-RPC message: {}", e);
                let resp = json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": { "code": -32700, "message": "Parse error" }
                });
                write_response(&resp);
                continue;
            }
        };

        let id = req.get("id").cloned();
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or_else(|| json!({}));

        let result = handle_method(&app, method, &params);

        // Requests without an id are notifications; JSON-RPC 2.0 forbids
        // responding to them.
        let id = match id {
            Some(id) => id,
            None => continue,
        };

        let response = match result {
            Ok(value) => json!({ "jsonrpc": "2.0", "id": id, "result": value }),
            Err(e) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": e.code, "message": e.message }
            }),
        };
        write_response(&response);
    }

    info!("chromehist MCP server shutting down");
}

fn write_response(response: &Value) {
    println!("{}", response);
    if let Err(e) = io::stdout().flush() {
        error!("failed to flush stdout: {}", e);
    }
}
