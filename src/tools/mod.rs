//! MCP Tools implementation
//!
//! Three tools share one `HelpDesk`:
//! - `man`: topic documentation
//! - `fun`: categorized operation listing
//! - `topics`: every topic and its synonyms

mod args;
mod fun;
mod man;
mod topics;

use std::sync::Arc;

use crate::help::HelpDesk;
use crate::server::McpServer;

pub use fun::FunTool;
pub use man::ManTool;
pub use topics::TopicsTool;

/// Register all tools with the MCP server
pub fn register_all_tools(server: &mut McpServer, desk: Arc<HelpDesk>) {
    server.register_tool(Box::new(ManTool::new(desk.clone())));
    server.register_tool(Box::new(FunTool::new(desk.clone())));
    server.register_tool(Box::new(TopicsTool::new(desk)));
}
