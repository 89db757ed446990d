//! Keyword matching for topic resolution
//!
//! This module provides:
//! - The synonym table mapping alternate keywords to canonical topics
//! - Edit-distance scoring used for "did you mean" substitutions

mod fuzzy;
mod synonyms;

pub use fuzzy::{best_match, similarity, FuzzyMatch, DEFAULT_THRESHOLD};
pub use synonyms::{normalize_keyword, SynonymTable, TOPIC_SYNONYMS};
