//! MCP Server implementation
//!
//! Newline-delimited JSON-RPC over stdio. Each request line produces at most
//! one response line; notifications produce none.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use crate::error::{HelpError, HelpResult};
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool};

pub use handlers::*;

/// MCP protocol revision announced during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Server that dispatches JSON-RPC requests to registered tools
pub struct McpServer {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl McpServer {
    /// Create a new MCP server with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a new MCP server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        log::debug!("registered tool `{}`", name);
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve stdin/stdout until EOF (blocking)
    pub fn run(&self) -> HelpResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve requests from `reader`, writing responses to `writer`
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> HelpResult<()> {
        log::info!(
            "{} {} serving {} tools",
            self.server_info.name,
            self.server_info.version,
            self.tools.len()
        );
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(response) = self.handle_message(trimmed)? {
                    writeln!(writer, "{}", response)?;
                    writer.flush()?;
                }
            }
            line.clear();
        }
        log::info!("input closed, shutting down");
        Ok(())
    }

    /// Handle one request line; returns the serialized response, if any
    pub fn handle_message(&self, request_str: &str) -> HelpResult<Option<String>> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                log::warn!("unparseable request: {}", e);
                return Ok(Some(serde_json::to_string(&JsonRpcError::parse_error(e.to_string()))?));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);
        if !request.is_valid() {
            let error = JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'");
            return Ok(Some(serde_json::to_string(&error)?));
        }

        let outcome = self.dispatch(id.clone(), &request);
        if request.is_notification() {
            log::debug!("notification `{}` handled", request.method);
            return Ok(None);
        }

        let response = match outcome {
            Ok(result) => serde_json::to_string(&JsonRpcResponse::new(id, result))?,
            Err(error) => serde_json::to_string(&error)?,
        };
        Ok(Some(response))
    }

    fn dispatch(&self, id: Value, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "notifications/initialized" => Ok(Value::Null),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tool_call(id, request.params.as_ref()),
            "ping" => Ok(json!({})),
            other => Err(JsonRpcError::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        json!({ "tools": tools })
    }

    fn handle_tool_call(&self, id: Value, params: Option<&Value>) -> Result<Value, JsonRpcError> {
        let params = params.ok_or_else(|| {
            JsonRpcError::invalid_params(id.clone(), "missing parameters".to_string())
        })?;
        let tool_name = extract_tool_name(params).ok_or_else(|| {
            JsonRpcError::invalid_params(id.clone(), "missing tool name".to_string())
        })?;

        let tool = self.tools.get(tool_name).ok_or_else(|| {
            JsonRpcError::new(
                id.clone(),
                crate::protocol::INVALID_PARAMS,
                "Unknown tool",
                Some(json!({ "tool": tool_name })),
            )
        })?;

        log::debug!("calling tool `{}`", tool_name);
        match tool.execute(extract_arguments(params)) {
            Ok(result) => Ok(result),
            // Lookup misses are answers, not protocol failures
            Err(HelpError::Resolution(e)) => {
                log::info!("tool `{}`: {}", tool_name, e);
                Ok(error_response(e.to_string()))
            }
            Err(HelpError::InvalidParams(details)) => {
                Err(JsonRpcError::invalid_params(id, details))
            }
            Err(e) => {
                log::error!("tool `{}` failed: {}", tool_name, e);
                Err(JsonRpcError::internal_error(id, e.to_string()))
            }
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}
