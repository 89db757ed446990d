//! `man` tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::args::{format_property, output_format, query_from_args, query_properties, OutputFormat};
use crate::error::HelpResult;
use crate::help::HelpDesk;
use crate::protocol::{McpTool, Tool};
use crate::server::texts_response;

/// Tool returning the prose documentation for a topic
pub struct ManTool {
    desk: Arc<HelpDesk>,
}

impl ManTool {
    pub fn new(desk: Arc<HelpDesk>) -> Self {
        Self { desk }
    }
}

impl Tool for ManTool {
    fn definition(&self) -> McpTool {
        let mut properties = query_properties();
        properties["format"] = format_property();

        McpTool {
            name: "man".to_string(),
            description: "Show the documentation for a topic named by keyword or example value"
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
        let record = self.desk.man(&query)?;

        if format == OutputFormat::Json {
            return Ok(texts_response(vec![serde_json::to_string_pretty(&record)?]));
        }

        let mut texts = Vec::new();
        if let Some(notice) = &record.notice {
            texts.push(format!("note: {}", notice));
        }
        texts.push(record.render());
        Ok(texts_response(texts))
    }
}
