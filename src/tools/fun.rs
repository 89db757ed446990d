//! `fun` tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::args::{
    flag, format_property, output_format, query_from_args, query_properties, OutputFormat,
};
use crate::error::HelpResult;
use crate::help::{FunOptions, HelpDesk};
use crate::protocol::{McpTool, Tool};
use crate::server::texts_response;

/// Tool listing the operations that apply to a topic, grouped by category
pub struct FunTool {
    desk: Arc<HelpDesk>,
}

impl FunTool {
    pub fn new(desk: Arc<HelpDesk>) -> Self {
        Self { desk }
    }
}

impl Tool for FunTool {
    fn definition(&self) -> McpTool {
        let mut properties = query_properties();
        properties["extended"] = json!({
            "type": "boolean",
            "default": false,
            "description": "Also list operations from peripheral namespaces"
        });
        properties["format"] = format_property();

        McpTool {
            name: "fun".to_string(),
            description: "List the operations that apply to a topic, grouped by category"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": properties
            }),
        }
    }

    fn execute(&self, params: Value) -> HelpResult<Value> {
        let query = query_from_args(&params)?;
        let format = output_format(&params)?;
        let options = FunOptions {
            extended_scope: flag(&params, "extended")?,
        };
        let listing = self.desk.fun(&query, options)?;

        if format == OutputFormat::Json {
            return Ok(texts_response(vec![serde_json::to_string_pretty(&listing)?]));
        }

        let mut texts = Vec::new();
        if let Some(notice) = &listing.notice {
            texts.push(format!("note: {}", notice));
        }
        texts.push(listing.render());
        Ok(texts_response(texts))
    }
}
