//! Query arguments shared by the `man` and `fun` tools

use serde_json::{json, Value};

use crate::error::{HelpError, HelpResult};
use crate::types::{HelpQuery, HelpValue};

const QUERY_KEYS: [&str; 3] = ["topic", "literal", "value"];

/// JSON schema properties for the query arguments
pub fn query_properties() -> Value {
    json!({
        "topic": {
            "type": "string",
            "description": "Topic keyword or synonym, e.g. \"strings\" or \"io\""
        },
        "literal": {
            "type": "string",
            "description": "Value written as source text, e.g. \"1//2\", \"[1, 2]\" or \"::Int64\""
        },
        "value": {
            "description": "JSON value whose type selects the topic"
        }
    })
}

/// Read exactly one of `topic`, `literal` or `value` from tool arguments
pub fn query_from_args(params: &Value) -> HelpResult<HelpQuery> {
    let present: Vec<&str> = QUERY_KEYS
        .iter()
        .copied()
        .filter(|key| params.get(*key).is_some())
        .collect();

    match present.as_slice() {
        ["topic"] => params["topic"]
            .as_str()
            .map(HelpQuery::keyword)
            .ok_or_else(|| HelpError::InvalidParams("`topic` must be a string".to_string())),
        ["literal"] => {
            let src = params["literal"]
                .as_str()
                .ok_or_else(|| HelpError::InvalidParams("`literal` must be a string".to_string()))?;
            HelpValue::parse_literal(src).map(HelpQuery::Value).ok_or_else(|| {
                HelpError::InvalidParams(format!("`{}` is not a value literal", src))
            })
        }
        ["value"] => Ok(HelpQuery::Value(HelpValue::from_json(&params["value"]))),
        [] => Err(HelpError::InvalidParams(
            "one of `topic`, `literal` or `value` is required".to_string(),
        )),
        several => Err(HelpError::InvalidParams(format!(
            "only one query argument may be given, got {}",
            several.join(", ")
        ))),
    }
}

/// How a tool renders its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// JSON schema property for the `format` argument
pub fn format_property() -> Value {
    json!({
        "type": "string",
        "enum": ["text", "json"],
        "default": "text",
        "description": "Plain text for reading, or the record as JSON"
    })
}

/// Read the optional `format` argument
pub fn output_format(params: &Value) -> HelpResult<OutputFormat> {
    match params.get("format") {
        None | Some(Value::Null) => Ok(OutputFormat::Text),
        Some(Value::String(s)) if s == "text" => Ok(OutputFormat::Text),
        Some(Value::String(s)) if s == "json" => Ok(OutputFormat::Json),
        Some(other) => Err(HelpError::InvalidParams(format!(
            "`format` must be \"text\" or \"json\", got {}",
            other
        ))),
    }
}

/// Optional boolean flag, defaulting to false
pub fn flag(params: &Value, key: &str) -> HelpResult<bool> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(HelpError::InvalidParams(format!("`{}` must be a boolean", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_argument() {
        let query = query_from_args(&json!({"topic": "io"})).unwrap();
        assert_eq!(query, HelpQuery::keyword("io"));
    }

    #[test]
    fn test_literal_argument_parses_value() {
        let query = query_from_args(&json!({"literal": "1//2"})).unwrap();
        assert_eq!(query, HelpQuery::Value(HelpValue::Rational(1, 2)));
    }

    #[test]
    fn test_literal_that_is_not_a_value_is_rejected() {
        let err = query_from_args(&json!({"literal": "hello world"})).unwrap_err();
        assert!(matches!(err, HelpError::InvalidParams(_)));
    }

    #[test]
    fn test_json_value_argument() {
        let query = query_from_args(&json!({"value": [1, 2]})).unwrap();
        assert_eq!(
            query,
            HelpQuery::Value(HelpValue::Array(vec![HelpValue::Int(1), HelpValue::Int(2)]))
        );
    }

    #[test]
    fn test_missing_or_ambiguous_arguments() {
        assert!(matches!(
            query_from_args(&json!({})),
            Err(HelpError::InvalidParams(_))
        ));
        let err = query_from_args(&json!({"topic": "io", "value": 1})).unwrap_err();
        assert!(err.to_string().contains("topic, value"));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(output_format(&json!({})).unwrap(), OutputFormat::Text);
        assert_eq!(output_format(&json!({"format": "json"})).unwrap(), OutputFormat::Json);
        assert!(matches!(
            output_format(&json!({"format": "yaml"})),
            Err(HelpError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_flag() {
        assert!(!flag(&json!({}), "extended").unwrap());
        assert!(flag(&json!({"extended": true}), "extended").unwrap());
        assert!(flag(&json!({"extended": "yes"}), "extended").is_err());
    }
}
