//! `topics` tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::args::{format_property, output_format, OutputFormat};
use crate::error::HelpResult;
use crate::help::HelpDesk;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool listing every topic with its synonyms
pub struct TopicsTool {
    desk: Arc<HelpDesk>,
}

impl TopicsTool {
    pub fn new(desk: Arc<HelpDesk>) -> Self {
        Self { desk }
    }
}

impl Tool for TopicsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "topics".to_string(),
            description: "List every help topic with its title and synonyms".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "format": format_property()
                }
            }),
        }
    }

    fn execute(&self, params: Value) -> HelpResult<Value> {
        let text = match output_format(&params)? {
            OutputFormat::Text => self.desk.render_topics(),
            OutputFormat::Json => serde_json::to_string_pretty(&self.desk.topics())?,
        };
        Ok(text_response(text))
    }
}
