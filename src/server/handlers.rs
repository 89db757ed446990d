//! Helpers for building tool results and reading tool-call params

use serde_json::{json, Value};

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    texts_response(vec![text])
}

/// Build a response with one text content item per entry
pub fn texts_response(texts: Vec<String>) -> Value {
    let content: Vec<Value> = texts
        .into_iter()
        .map(|text| json!({ "type": "text", "text": text }))
        .collect();
    json!({ "content": content })
}

/// Build an error content response
pub fn error_response(message: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_arguments_defaults_to_empty_object() {
        assert_eq!(extract_arguments(&json!({"name": "man"})), json!({}));
        assert_eq!(
            extract_arguments(&json!({"arguments": {"topic": "io"}})),
            json!({"topic": "io"})
        );
    }

    #[test]
    fn test_texts_response_keeps_order() {
        let value = texts_response(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value["content"][0]["text"], "a");
        assert_eq!(value["content"][1]["text"], "b");
        assert!(value.get("isError").is_none());
    }

    #[test]
    fn test_error_response_flags_error() {
        let value = error_response("nope".to_string());
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["text"], "Error: nope");
    }
}
