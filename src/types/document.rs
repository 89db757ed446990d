//! Documentation records returned by `man`

use serde::Serialize;

use super::Topic;

/// Prose documentation for one topic
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub topic: Topic,
    pub title: String,
    pub body: String,
    #[serde(rename = "seeAlso", skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<Topic>,
    /// "Did you mean" notice when the topic was substituted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl DocumentRecord {
    /// Render as plain text for terminals and tool output
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push_str("\n\n");
        out.push_str(self.body.trim_end());
        out.push('\n');
        if !self.see_also.is_empty() {
            let related: Vec<&str> = self.see_also.iter().map(Topic::as_str).collect();
            out.push_str("\nSee also: ");
            out.push_str(&related.join(", "));
            out.push('\n');
        }
        out
    }
}
