//! Integration tests for the MCP stdio server

use std::io::Cursor;
use std::sync::Arc;

use serde_json::{json, Value};
use topic_help::protocol::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use topic_help::tools::register_all_tools;
use topic_help::{HelpConfig, HelpDesk, McpServer};

fn server() -> McpServer {
    let desk = Arc::new(HelpDesk::with_config(&HelpConfig::default()).unwrap());
    let mut server = McpServer::new();
    register_all_tools(&mut server, desk);
    server
}

fn call(server: &McpServer, request: Value) -> Value {
    let response = server
        .handle_message(&request.to_string())
        .unwrap()
        .expect("request should get a response");
    serde_json::from_str(&response).unwrap()
}

fn tool_call(server: &McpServer, name: &str, arguments: Value) -> Value {
    call(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
}

fn first_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_initialize_and_list_tools() {
    let server = server();
    let init = call(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}));
    assert_eq!(init["result"]["serverInfo"]["name"], topic_help::NAME);

    let list = call(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
    let names: Vec<&str> = list["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["fun", "man", "topics"]);
}

#[test]
fn test_notification_gets_no_response() {
    let server = server();
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .unwrap();
    assert!(response.is_none());
}

#[test]
fn test_fun_tool_call() {
    let server = server();
    let response = tool_call(&server, "fun", json!({"topic": "dicts"}));
    assert_eq!(response["id"], 7);
    let text = first_text(&response);
    assert!(text.starts_with("Macros\n") || text.starts_with("General Functions\n"));
    assert!(text.contains("haskey"));
}

#[test]
fn test_fuzzy_call_reports_substitution() {
    let server = server();
    let response = tool_call(&server, "man", json!({"topic": "compelx"}));
    assert!(first_text(&response).starts_with("note: no help topic named `compelx`"));
    assert!(response["result"].get("isError").is_none());
}

#[test]
fn test_unknown_topic_is_tool_error_not_protocol_error() {
    let server = server();
    let response = tool_call(&server, "man", json!({"topic": "xyz-not-a-topic"}));
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    assert!(first_text(&response).contains("unknown help topic"));
}

#[test]
fn test_bad_arguments_are_invalid_params() {
    let server = server();
    let response = tool_call(&server, "fun", json!({"topic": "io", "literal": "1"}));
    assert_eq!(response["error"]["code"], INVALID_PARAMS);

    let response = tool_call(&server, "nope", json!({}));
    assert_eq!(response["error"]["code"], INVALID_PARAMS);
}

#[test]
fn test_protocol_errors() {
    let server = server();
    let parse: Value =
        serde_json::from_str(&server.handle_message("{not json").unwrap().unwrap()).unwrap();
    assert_eq!(parse["error"]["code"], PARSE_ERROR);

    let version = call(&server, json!({"jsonrpc": "1.0", "id": 1, "method": "ping"}));
    assert_eq!(version["error"]["code"], INVALID_REQUEST);

    let method = call(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}));
    assert_eq!(method["error"]["code"], METHOD_NOT_FOUND);
}

#[test]
fn test_serve_answers_each_request_line() {
    let server = server();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        "\n\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"topics"}}"#,
        "\n"
    );
    let mut output = Vec::new();
    server.serve(Cursor::new(input), &mut output).unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert!(lines[1]["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("integers"));
}
