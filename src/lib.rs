//! Topic Help
//!
//! Interactive help for newcomers. A query (a topic keyword, a synonym, a
//! near-miss spelling, or an example value) is resolved to a topic, which
//! then yields either prose documentation (`man`) or the operations that
//! apply to it, laid out as a category-grouped column listing (`fun`).
//!
//! # Features
//!
//! - **Synonyms**: `io` finds `files`, `reserved` finds `keywords`
//! - **Did you mean**: edit-distance matching above a threshold
//! - **Values as queries**: `1//2` or `Dict(:a => 1)` pick their type's topic
//! - **Two surfaces**: MCP tools over stdio, or a line REPL
//!
//! # Modules
//!
//! - `types`: Core data structures (Topic, Category, HelpValue, DocumentRecord)
//! - `search`: Synonym table and fuzzy keyword matching
//! - `resolver`: Query to topic resolution and value classification
//! - `listing`: Column-major grid formatting of operation names
//! - `registry`: Built-in topic documents and operation tables
//! - `help`: The `man`, `fun` and `topics` entry points
//! - `config`: Environment-driven configuration
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: MCP server implementation
//! - `tools`: MCP tool implementations
//! - `repl`: Line-oriented shell
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use topic_help::{HelpDesk, McpServer};
//! use topic_help::tools::register_all_tools;
//!
//! fn main() -> topic_help::HelpResult<()> {
//!     let desk = Arc::new(HelpDesk::new()?);
//!     let mut server = McpServer::new();
//!     register_all_tools(&mut server, desk);
//!     server.run()
//! }
//! ```

pub mod config;
pub mod error;
pub mod help;
pub mod listing;
pub mod protocol;
pub mod registry;
pub mod repl;
pub mod resolver;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use config::HelpConfig;
pub use error::{HelpError, HelpResult, ResolutionError};
pub use help::{FunOptions, HelpDesk, Listing};
pub use listing::{format_listing, ListingOptions};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use resolver::{Resolution, TopicResolver};
pub use server::McpServer;
pub use types::{Category, CategoryGroup, DocumentRecord, HelpQuery, HelpValue, Topic};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
