//! Request handling for the MCP server
//!
//! Tools:
//! - list_units: every known unit
//! - list_compatible_units: units convertible to/from a unit
//! - convert: convert a value between two units
//! - describe_unit: symbol, name, category and dimensions of a unit
//! - save_history: write this session's conversions to a text file

use std::path::PathBuf;
use metron::config::Settings;
use metron::format::{gui_line, parse_value};
use metron::{ConversionRequest, MetronError, Session};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "metron";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is `Some(Null)`
    #[serde(default, deserialize_with = "present")]
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<JsonValue>, D::Error> {
    JsonValue::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        McpError {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl McpResponse {
    fn new(id: Option<JsonValue>, outcome: Result<JsonValue, McpError>) -> Self {
        let (result, error) = match outcome {
            Ok(r) => (Some(r), None),
            Err(e) => (None, Some(e)),
        };
        McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// Holds the session state shared by every request on the connection
pub struct Server {
    session: Session,
    settings: Settings,
}

impl Server {
    pub fn new(session: Session, settings: Settings) -> Self {
        Server { session, settings }
    }

    /// Handle one line of input; `None` when no response is due
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let message = match serde_json::from_str::<JsonValue>(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let error = McpError::new(PARSE_ERROR, format!("Parse error: {}", e));
                return serialize(&McpResponse::new(Some(JsonValue::Null), Err(error)));
            }
        };

        let id = message.get("id").cloned().unwrap_or(JsonValue::Null);
        let response = match serde_json::from_value::<McpRequest>(message) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = self.handle_request(&request);
                // Notifications (no id member) should NOT receive a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    return None;
                }
                response
            }
            // Well-formed JSON that is not a request object
            Err(e) => {
                warn!(error = %e, "invalid request");
                McpResponse::new(
                    Some(id),
                    Err(McpError::new(INVALID_REQUEST, format!("Invalid Request: {}", e))),
                )
            }
        };
        serialize(&response)
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        let outcome = if request.jsonrpc != "2.0" {
            Err(McpError::new(
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ))
        } else {
            match request.method.as_str() {
                // Lifecycle
                "initialize" => handle_initialize(&request.params),
                "initialized" | "notifications/initialized" => Ok(json!({})),
                "ping" => Ok(json!({})),

                // Tools
                "tools/list" => handle_tools_list(),
                "tools/call" => self.handle_tool_call(&request.params),

                _ => Err(McpError::new(
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                )),
            }
        };
        McpResponse::new(request.id.clone(), outcome)
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params
            .as_ref()
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        match name {
            "list_units" => Ok(self.tool_list_units()),
            "list_compatible_units" => self.tool_list_compatible_units(&args),
            "convert" => self.tool_convert(&args),
            "describe_unit" => self.tool_describe_unit(&args),
            "save_history" => Ok(self.tool_save_history(&args)),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_list_units(&self) -> JsonValue {
        let units = self.session.gateway().list_units();
        json!({
            "content": [{ "type": "text", "text": format!("{} units available", units.len()) }],
            "units": units,
            "isError": false
        })
    }

    fn tool_list_compatible_units(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let unit = str_arg(args, "unit")?;
        Ok(match self.session.gateway().list_compatible_units(unit) {
            Ok(units) => json!({
                "content": [{ "type": "text", "text": format!("{} units are compatible with {}", units.len(), unit) }],
                "units": units,
                "isError": false
            }),
            Err(e) => tool_error(&e),
        })
    }

    fn tool_convert(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let value = match args.get("value") {
            Some(JsonValue::Number(n)) => n.as_f64().ok_or_else(|| McpError::invalid_params("value is not a finite number")),
            Some(JsonValue::String(s)) => match parse_value(s) {
                Ok(v) => Ok(v),
                Err(e) => return Ok(tool_error(&e)),
            },
            Some(_) => Err(McpError::invalid_params("value must be a number or numeric string")),
            None => Err(McpError::invalid_params("Missing value argument")),
        }?;
        let from = str_arg(args, "from_unit")?;
        let to = str_arg(args, "to_unit")?;

        let req = ConversionRequest::new(value, from.trim(), to.trim());
        Ok(match self.session.convert(&req) {
            Ok(result) => json!({
                "content": [{ "type": "text", "text": gui_line(&req, &result) }],
                "value": result.value,
                "unit": result.unit,
                "isError": false
            }),
            Err(e) => tool_error(&e),
        })
    }

    fn tool_describe_unit(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let unit = str_arg(args, "unit")?;
        Ok(match self.session.gateway().describe_unit(unit) {
            Ok(info) => json!({
                "content": [{
                    "type": "text",
                    "text": format!("{} ({}): {}, dimensions {}", info.name, info.symbol, info.category, info.dimensionality)
                }],
                "unit": info,
                "isError": false
            }),
            Err(e) => tool_error(&e),
        })
    }

    fn tool_save_history(&self, args: &JsonValue) -> JsonValue {
        let path = args
            .get("path")
            .and_then(|v| v.as_str())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.settings.history_path.clone());

        match self.session.save_history(&path) {
            Ok(count) => {
                info!(path = %path.display(), count, "history saved on request");
                json!({
                    "content": [{ "type": "text", "text": format!("Saved {} conversion(s) to {}", count, path.display()) }],
                    "path": path.display().to_string(),
                    "entries": count,
                    "isError": false
                })
            }
            Err(e) => tool_error(&e),
        }
    }
}

fn serialize(response: &McpResponse) -> Option<String> {
    match serde_json::to_string(response) {
        Ok(json) => Some(json),
        Err(e) => {
            error!(error = %e, "failed to serialise response");
            None
        }
    }
}

fn str_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

/// Conversion failures are tool results, not protocol errors
fn tool_error(e: &MetronError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": format!("{} ({})", e, e.suggestion()) }],
        "code": e.code(),
        "recoverable": e.is_recoverable(),
        "error": e,
        "isError": true
    })
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion with dimensional compatibility checks"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_compatible_units to find valid targets for a unit, then convert. Unit names are case-insensitive."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_units",
                "description": "List every unit known to the registry.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_compatible_units",
                "description": "List the units a unit can be converted to (same dimensions), including itself.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "unit": { "type": "string", "description": "Unit name, symbol or alias (e.g. \"km\")" }
                    },
                    "required": ["unit"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value from one unit to another.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Value to convert" },
                        "from_unit": { "type": "string", "description": "Source unit (e.g. \"kilometer\")" },
                        "to_unit": { "type": "string", "description": "Target unit (e.g. \"mile\")" }
                    },
                    "required": ["value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "describe_unit",
                "description": "Show a unit's symbol, name, category and dimensions.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "unit": { "type": "string", "description": "Unit name, symbol or alias" }
                    },
                    "required": ["unit"]
                }
            },
            {
                "name": "save_history",
                "description": "Write this session's conversions to a text file, replacing its contents.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "path": { "type": "string", "description": "File path (default: METRON_HISTORY_PATH or conversion_history.txt)" }
                    }
                }
            }
        ]
    }))
}
