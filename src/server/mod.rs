//! Tool server
//!
//! Line-delimited JSON-RPC 2.0 over stdio exposing the core operations as tools (`initialize`, `tools/list`,
//! `tools/call`). Every response body is rendered through [`crate::format`], so clients choose plain, colored, JSON or
//! hybrid output per call.
//!
//! The server borrows its resolver and vocabulary; the binary builds them once at start-up and injects them here.

pub mod protocol;
pub mod tools;

use std::io::{self, BufRead, Write};

use ontoglyph_core::{Resolver, Vocabulary, validate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::format::{OutputFormat, RenderConfig, render_definitions, render_diagnostics, render_graphemes};
use crate::suggest::suggest;
use crate::version::ONTOGLYPH_VERSION;

use protocol::*;

/// Errors that turn a `tools/call` into a JSON-RPC error response.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct TextArgs {
    text: Option<String>,
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
struct SymbolsArgs {
    symbols: Vec<String>,
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
struct ValidateArgs {
    vocabulary: Option<Vocabulary>,
    format: Option<OutputFormat>,
}

/// Tool server bound to one resolver and the vocabulary it was built from.
pub struct ToolServer<'a> {
    resolver: &'a Resolver,
    vocabulary: &'a Vocabulary,
    config: RenderConfig,
}

impl<'a> ToolServer<'a> {
    /// Create a server. `config` supplies the default format when a call does not name one.
    pub fn new(resolver: &'a Resolver, vocabulary: &'a Vocabulary, config: RenderConfig) -> Self {
        Self {
            resolver,
            vocabulary,
            config,
        }
    }

    /// Serve requests from `input` until EOF, writing one response line per request.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        tracing::info!("tool server started");

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            tracing::debug!(bytes = line.len(), "request");

            let Some(response) = self.handle(&line) else {
                continue;
            };
            let out = serde_json::to_string(&response).map_err(io::Error::other)?;
            writeln!(output, "{out}")?;
            output.flush()?;
        }

        tracing::info!("tool server shutting down");
        Ok(())
    }

    /// Handle a single JSON-RPC message. Notifications produce no response.
    pub fn handle(&self, msg: &str) -> Option<JsonRpcResponse> {
        let req: JsonRpcRequest = match serde_json::from_str(msg) {
            Ok(r) => r,
            Err(e) => return Some(JsonRpcResponse::error(None, PARSE_ERROR, e.to_string())),
        };

        if req.id.is_none() && req.method.starts_with("notifications/") {
            tracing::debug!(method = %req.method, "notification");
            return None;
        }

        let id = req.id.clone();
        let response = match req.method.as_str() {
            "initialize" => to_response(
                id,
                InitializeResult {
                    protocol_version: PROTOCOL_VERSION.into(),
                    capabilities: ServerCapabilities {
                        tools: ToolsCapability { list_changed: false },
                    },
                    server_info: ServerInfo {
                        name: "ontoglyph".into(),
                        version: ONTOGLYPH_VERSION.into(),
                    },
                },
            ),

            "tools/list" => to_response(id, ToolsListResult { tools: tools::get_tools() }),

            "tools/call" => {
                let params: ToolCallParams = match serde_json::from_value(req.params) {
                    Ok(p) => p,
                    Err(e) => return Some(JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string())),
                };
                tracing::debug!(tool = %params.name, "calling tool");
                match self.call_tool(&params.name, params.arguments) {
                    Ok(result) => to_response(id, result),
                    Err(e) => JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
                }
            }

            _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Unknown method: {}", req.method)),
        };
        Some(response)
    }

    /// Dispatch a tool call by name.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolCallResult, ToolError> {
        match name {
            tools::RESOLVE_SYMBOLS => {
                let args: SymbolsArgs = parse_args(name, arguments)?;
                let defs = self.resolver.resolve_symbols(&args.symbols);
                Ok(ToolCallResult::text(render_definitions(&defs, &self.config_for(args.format))))
            }
            tools::FIND_SYMBOLS => {
                let args: TextArgs = parse_args(name, arguments)?;
                let Some(text) = args.text else {
                    return Ok(missing_text());
                };
                let found = self.resolver.find_symbols_in_text(&text);
                Ok(ToolCallResult::text(render_graphemes(&found, &self.config_for(args.format))))
            }
            tools::RESOLVE_TEXT => {
                let args: TextArgs = parse_args(name, arguments)?;
                let Some(text) = args.text else {
                    return Ok(missing_text());
                };
                let defs = self.resolver.resolve_text(&text);
                Ok(ToolCallResult::text(render_definitions(&defs, &self.config_for(args.format))))
            }
            tools::SUGGEST_SYMBOLS => {
                let args: TextArgs = parse_args(name, arguments)?;
                let Some(text) = args.text else {
                    return Ok(missing_text());
                };
                let defs = suggest(self.resolver, &text);
                Ok(ToolCallResult::text(render_definitions(&defs, &self.config_for(args.format))))
            }
            tools::VALIDATE_VOCABULARY => {
                let args: ValidateArgs = parse_args(name, arguments)?;
                let diagnostics = validate(args.vocabulary.as_ref().unwrap_or(self.vocabulary));
                let text = render_diagnostics(&diagnostics, &self.config_for(args.format));
                if diagnostics.is_empty() {
                    Ok(ToolCallResult::text(text))
                } else {
                    Ok(ToolCallResult::error(text))
                }
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    fn config_for(&self, format: Option<OutputFormat>) -> RenderConfig {
        match format {
            Some(format) => self.config.clone().with_format(format),
            None => self.config.clone(),
        }
    }
}

/// Absent `arguments` are treated as an empty object.
fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() { Value::Object(Default::default()) } else { arguments };
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

fn missing_text() -> ToolCallResult {
    ToolCallResult::error("missing required argument `text`")
}

fn to_response<T: serde::Serialize>(id: Option<Value>, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(id, v),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontoglyph_core::vocab::canonical;
    use serde_json::json;

    fn server() -> ToolServer<'static> {
        ToolServer::new(
            Resolver::canonical(),
            canonical(),
            RenderConfig::new().with_format(OutputFormat::Json),
        )
    }

    fn call(server: &ToolServer<'_>, params: Value) -> Value {
        let msg = json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": params}).to_string();
        serde_json::to_value(server.handle(&msg).unwrap()).unwrap()
    }

    fn text_of(response: &Value) -> &str {
        response["result"]["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn test_initialize_reports_server_info() {
        let msg = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
        let response = serde_json::to_value(server().handle(msg).unwrap()).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "ontoglyph");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    }

    #[test]
    fn test_tools_list_names() {
        let msg = r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#;
        let response = serde_json::to_value(server().handle(msg).unwrap()).unwrap();
        let names: Vec<&str> = response["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            ["resolve_symbols", "find_symbols", "resolve_text", "validate_vocabulary", "suggest_symbols"]
        );
    }

    #[test]
    fn test_notifications_get_no_response() {
        let msg = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server().handle(msg).is_none());
    }

    #[test]
    fn test_parse_error() {
        let response = serde_json::to_value(server().handle("{not json").unwrap()).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
    }

    #[test]
    fn test_unknown_method() {
        let msg = r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#;
        let response = serde_json::to_value(server().handle(msg).unwrap()).unwrap();
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[test]
    fn test_resolve_text_json() {
        let response = call(
            &server(),
            json!({"name": "resolve_text", "arguments": {"text": "⏳ pending 📌 fact"}}),
        );
        let defs: Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(defs[0]["grapheme"], "📌");
        assert_eq!(defs[1]["grapheme"], "⏳");
        assert!(response["result"].get("isError").is_none());
    }

    #[test]
    fn test_find_symbols_plain_override() {
        let response = call(
            &server(),
            json!({"name": "find_symbols", "arguments": {"text": "🔍 and 🔍 again", "format": "plain"}}),
        );
        assert_eq!(text_of(&response), "🔍");
    }

    #[test]
    fn test_resolve_symbols_skips_unknown() {
        let response = call(
            &server(),
            json!({"name": "resolve_symbols", "arguments": {"symbols": ["🔍", "😀", "🧠"]}}),
        );
        let defs: Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(defs.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_text_is_tool_error() {
        let response = call(&server(), json!({"name": "resolve_text", "arguments": {}}));
        assert_eq!(response["result"]["isError"], true);
        assert!(text_of(&response).contains("text"));
    }

    #[test]
    fn test_absent_arguments_is_tool_error() {
        let response = call(&server(), json!({"name": "find_symbols"}));
        assert_eq!(response["result"]["isError"], true);
    }

    #[test]
    fn test_wrong_argument_type_is_invalid_params() {
        let response = call(&server(), json!({"name": "resolve_symbols", "arguments": {"symbols": "🔍"}}));
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_tool() {
        let response = call(&server(), json!({"name": "translate", "arguments": {}}));
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        assert!(response["error"]["message"].as_str().unwrap().contains("translate"));
    }

    #[test]
    fn test_validate_defaults_to_server_vocabulary() {
        let response = call(&server(), json!({"name": "validate_vocabulary"}));
        assert_eq!(text_of(&response), "[]");
    }

    #[test]
    fn test_validate_custom_vocabulary() {
        let response = call(
            &server(),
            json!({"name": "validate_vocabulary", "arguments": {"vocabulary": {}, "format": "plain"}}),
        );
        assert_eq!(response["result"]["isError"], true);
        assert!(text_of(&response).contains("Category structure must contain at least one symbol"));
    }

    #[test]
    fn test_validate_vocabulary_with_null_fields() {
        let vocabulary = json!({
            "structure": {
                "block": {"grapheme": null, "category": "structure", "meaning": "m",
                          "allowedContexts": null, "usageLevel": "OPTIONAL", "example": "e"}
            }
        });
        let response = call(
            &server(),
            json!({"name": "validate_vocabulary", "arguments": {"vocabulary": vocabulary, "format": "plain"}}),
        );
        assert_eq!(response["result"]["isError"], true);
        let text = text_of(&response);
        assert!(text.starts_with("Missing emoji at structure.block\nallowedContext must be non-empty array at structure.block"));
    }

    #[test]
    fn test_run_writes_one_line_per_request() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"suggest_symbols","arguments":{"text":"urgent","format":"plain"}}}"#,
            "\n",
        );
        let mut output = Vec::new();
        server().run(input.as_bytes(), &mut output).unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
        assert_eq!(lines.len(), 2);
        let last: Value = serde_json::from_str(lines[1]).unwrap();
        assert!(text_of(&last).starts_with("🚨 [state]"));
    }
}
