//! Topic Resolver
//!
//! Maps a keyword or a value to one canonical topic. Exact keyword and
//! synonym matches are O(1) lookups; anything else falls back to
//! edit-distance matching, which succeeds with a "did you mean" notice.

mod classify;

pub use classify::{classify, classify_type_name};

use crate::error::{HelpResult, ResolutionError};
use crate::search::{best_match, normalize_keyword, SynonymTable, DEFAULT_THRESHOLD};
use crate::types::{HelpQuery, HelpValue, Topic};

/// Fuzzy substitution applied while resolving
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    /// What the user typed
    pub input: String,
    /// The known keyword it was taken for
    pub keyword: String,
    pub score: f64,
}

/// Successful resolution of a query
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub topic: Topic,
    /// Type name of the value the topic was derived from, if any
    pub value_type: Option<String>,
    pub substitution: Option<Substitution>,
}

impl Resolution {
    fn exact(topic: Topic) -> Self {
        Self {
            topic,
            value_type: None,
            substitution: None,
        }
    }

    /// Advisory text shown to the user when the topic was substituted
    pub fn notice(&self) -> Option<String> {
        self.substitution.as_ref().map(|sub| {
            let suggestion = if sub.keyword == self.topic.as_str() {
                format!("`{}`", sub.keyword)
            } else {
                format!("`{}` (topic `{}`)", sub.keyword, self.topic)
            };
            format!(
                "no help topic named `{}`; showing {} instead",
                sub.input, suggestion
            )
        })
    }
}

/// Resolves keywords and values against a read-only synonym table
#[derive(Debug, Clone)]
pub struct TopicResolver {
    table: SynonymTable,
    threshold: f64,
}

impl TopicResolver {
    pub fn new(table: SynonymTable, threshold: f64) -> Self {
        Self { table, threshold }
    }

    /// Resolver over the built-in synonym table
    pub fn builtin() -> HelpResult<Self> {
        Ok(Self::new(SynonymTable::builtin()?, DEFAULT_THRESHOLD))
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn resolve(&self, query: &HelpQuery) -> Result<Resolution, ResolutionError> {
        match query {
            HelpQuery::Keyword(keyword) => self.resolve_keyword(keyword),
            HelpQuery::Value(value) => self.resolve_value(value),
        }
    }

    pub fn resolve_keyword(&self, keyword: &str) -> Result<Resolution, ResolutionError> {
        let normalized = normalize_keyword(keyword);
        if normalized.is_empty() {
            return Err(ResolutionError::Unknown {
                keyword: keyword.trim().to_string(),
            });
        }

        if let Some(topic) = self.table.lookup(&normalized) {
            return Ok(Resolution::exact(topic.clone()));
        }

        match best_match(&normalized, self.table.keywords(), self.threshold) {
            Some(found) => {
                log::warn!(
                    "substituting topic `{}` for unknown keyword `{}` (score {:.2})",
                    found.topic,
                    keyword.trim(),
                    found.score
                );
                Ok(Resolution {
                    topic: found.topic,
                    value_type: None,
                    substitution: Some(Substitution {
                        input: keyword.trim().to_string(),
                        keyword: found.keyword,
                        score: found.score,
                    }),
                })
            }
            None => Err(ResolutionError::Unknown {
                keyword: keyword.trim().to_string(),
            }),
        }
    }

    pub fn resolve_value(&self, value: &HelpValue) -> Result<Resolution, ResolutionError> {
        let type_name = value.type_name();
        let keyword = classify(value)?;
        let topic = self
            .table
            .lookup(keyword)
            .ok_or_else(|| ResolutionError::Unclassifiable {
                type_name: type_name.clone(),
            })?;
        log::debug!("classified value of type {} as topic `{}`", type_name, topic);
        Ok(Resolution {
            topic: topic.clone(),
            value_type: Some(type_name),
            substitution: None,
        })
    }
}
