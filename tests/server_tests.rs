//! Tool server tests: in-process over byte buffers, and through `ontoglyph serve`.

use std::io::Write;
use std::process::{Command, Stdio};

use ontoglyph::format::{OutputFormat, RenderConfig};
use ontoglyph::server::ToolServer;
use ontoglyph_core::Resolver;
use ontoglyph_core::vocab::canonical;
use serde_json::{Value, json};

fn session(requests: &[Value]) -> Vec<Value> {
    let server = ToolServer::new(
        Resolver::canonical(),
        canonical(),
        RenderConfig::new().with_format(OutputFormat::Json),
    );
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    let mut output = Vec::new();
    server.run(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn call(id: u64, name: &str, arguments: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "method": "tools/call", "params": {"name": name, "arguments": arguments}})
}

#[test]
fn test_session_responses_keep_ids() {
    let responses = session(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        call(3, "find_symbols", json!({"text": "🛑 stop"})),
    ]);
    let ids: Vec<&Value> = responses.iter().map(|r| &r["id"]).collect();
    assert_eq!(ids, [&json!(1), &json!(2), &json!(3)]);
}

#[test]
fn test_resolve_text_matches_core() {
    let text = "📌 Report received. ⏳ Awaiting police. ⚠️ Parent reports risk.";
    let responses = session(&[call(1, "resolve_text", json!({"text": text}))]);
    let body = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
    let defs: Value = serde_json::from_str(body).unwrap();

    let expected = serde_json::to_value(ontoglyph_core::resolve_text(text)).unwrap();
    assert_eq!(defs, expected);
}

#[test]
fn test_hybrid_format() {
    let responses = session(&[call(1, "resolve_symbols", json!({"symbols": ["🔍"], "format": "hybrid"}))]);
    let body = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(body.starts_with("🔍 [reasoning] "));
    assert!(body.contains("```json\n"));
}

#[test]
fn test_bad_format_is_invalid_params() {
    let responses = session(&[call(1, "find_symbols", json!({"text": "📌", "format": "xml"}))]);
    assert_eq!(responses[0]["error"]["code"], -32602);
}

#[test]
fn test_serve_over_stdio() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ontoglyph"))
        .arg("serve")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run ontoglyph serve");

    {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        writeln!(stdin, "{}", json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).unwrap();
        writeln!(stdin, "{}", call(2, "suggest_symbols", json!({"text": "Case escalated to review"}))).unwrap();
    }

    let output = child.wait_with_output().expect("wait for ontoglyph serve");
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));

    let defs: Value = serde_json::from_str(responses[1]["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
    let graphemes: Vec<&str> = defs.as_array().unwrap().iter().map(|d| d["grapheme"].as_str().unwrap()).collect();
    assert_eq!(graphemes, ["🔺", "👀"]);
}
