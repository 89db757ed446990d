//! Data types for the help desk
//!
//! This module contains the core data structures shared by the resolver,
//! the registry and the listing formatter.

mod category;
mod document;
mod operation;
mod topic;
mod value;

pub use category::Category;
pub use document::DocumentRecord;
pub use operation::{CategoryGroup, OperationEntry};
pub use topic::{Topic, TopicSummary};
pub use value::{HelpQuery, HelpValue};
