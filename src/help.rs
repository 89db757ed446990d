//! Help desk - the `man`, `fun` and `topics` entry points
//!
//! Combines the resolver, the registry and the listing formatter. A
//! `HelpDesk` is immutable once built and is shared between command
//! surfaces behind an `Arc`.

use std::io::Write;

use serde::Serialize;

use crate::config::HelpConfig;
use crate::error::{HelpError, HelpResult, ResolutionError};
use crate::listing::{format_listing, ListingOptions};
use crate::registry::HelpRegistry;
use crate::resolver::{Resolution, TopicResolver};
use crate::search::SynonymTable;
use crate::types::{DocumentRecord, HelpQuery, Topic, TopicSummary};

/// Options for `fun`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunOptions {
    /// Also list operations from peripheral namespaces
    pub extended_scope: bool,
}

/// Formatted operation listing for one topic
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub text: String,
    pub count: usize,
    pub extended: bool,
}

impl Listing {
    /// Listing text, or a one-line message when the topic has no operations
    pub fn render(&self) -> String {
        if self.count == 0 {
            format!("No operations are registered for topic `{}`.\n", self.topic)
        } else {
            self.text.clone()
        }
    }
}

/// Help desk with read-only lookup tables
#[derive(Debug, Clone)]
pub struct HelpDesk {
    resolver: TopicResolver,
    registry: HelpRegistry,
    listing: ListingOptions,
}

impl HelpDesk {
    /// Create a help desk configured from the environment
    pub fn new() -> HelpResult<Self> {
        Self::with_config(&HelpConfig::from_env())
    }

    /// Create a help desk from explicit configuration
    pub fn with_config(config: &HelpConfig) -> HelpResult<Self> {
        config.validate()?;

        let table = SynonymTable::builtin()?;
        let mut registry = HelpRegistry::builtin();
        if let Some(dir) = &config.docs_dir {
            registry = registry.with_docs_dir(dir)?;
        }
        registry.validate(&table)?;

        log::debug!(
            "help desk ready: {} keywords, width {}, threshold {}",
            table.len(),
            config.max_width,
            config.fuzzy_threshold
        );

        Ok(Self {
            resolver: TopicResolver::new(table, config.fuzzy_threshold),
            registry,
            listing: config.listing_options(),
        })
    }

    pub fn resolver(&self) -> &TopicResolver {
        &self.resolver
    }

    pub fn registry(&self) -> &HelpRegistry {
        &self.registry
    }

    pub fn listing_options(&self) -> ListingOptions {
        self.listing
    }

    pub fn resolve(&self, query: &HelpQuery) -> Result<Resolution, ResolutionError> {
        self.resolver.resolve(query)
    }

    /// Prose documentation for the topic a query resolves to
    pub fn man(&self, query: &HelpQuery) -> HelpResult<DocumentRecord> {
        let resolution = self.resolve(query)?;
        let mut record = self.registry.document(&resolution.topic).ok_or_else(|| {
            HelpError::Config(format!("topic `{}` has no document", resolution.topic))
        })?;
        record.notice = resolution.notice();
        Ok(record)
    }

    /// Operations applicable to the topic a query resolves to, formatted
    pub fn fun(&self, query: &HelpQuery, options: FunOptions) -> HelpResult<Listing> {
        let resolution = self.resolve(query)?;
        let group = self
            .registry
            .operations(&resolution.topic, options.extended_scope);
        log::debug!(
            "listing {} operations for `{}` (extended: {})",
            group.len(),
            resolution.topic,
            options.extended_scope
        );

        Ok(Listing {
            notice: resolution.notice(),
            text: format_listing(&group, &self.listing),
            count: group.len(),
            extended: options.extended_scope,
            topic: resolution.topic,
        })
    }

    /// Print the listing (preceded by any notice) to `out`
    pub fn fun_to<W: Write>(
        &self,
        query: &HelpQuery,
        options: FunOptions,
        out: &mut W,
    ) -> HelpResult<()> {
        let listing = self.fun(query, options)?;
        if let Some(notice) = &listing.notice {
            writeln!(out, "note: {}", notice)?;
        }
        out.write_all(listing.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Every topic with its title and synonyms
    pub fn topics(&self) -> Vec<TopicSummary> {
        let table = self.resolver.table();
        table
            .topics()
            .map(|topic| TopicSummary {
                topic: topic.clone(),
                title: self.registry.title(topic).unwrap_or_default().to_string(),
                synonyms: table.synonyms(topic.as_str()).to_vec(),
                operation_count: self.registry.operations(topic, true).len(),
            })
            .collect()
    }

    /// Topics as text, one per line: name, title and synonyms
    pub fn render_topics(&self) -> String {
        let topics = self.topics();
        let name_width = topics
            .iter()
            .map(|t| t.topic.as_str().len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for summary in &topics {
            let line = if summary.synonyms.is_empty() {
                format!("{:<width$}  {}", summary.topic, summary.title, width = name_width)
            } else {
                format!(
                    "{:<width$}  {} (also: {})",
                    summary.topic,
                    summary.title,
                    summary.synonyms.join(", "),
                    width = name_width
                )
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HelpValue;

    fn desk() -> HelpDesk {
        HelpDesk::with_config(&HelpConfig::default()).unwrap()
    }

    #[test]
    fn test_man_by_keyword_and_synonym() {
        let desk = desk();
        let doc = desk.man(&HelpQuery::keyword("reserved")).unwrap();
        assert_eq!(doc.topic.as_str(), "keywords");
        assert!(doc.notice.is_none());
        assert!(doc.body.contains("baremodule"));
    }

    #[test]
    fn test_man_by_value() {
        let doc = desk().man(&HelpQuery::value(HelpValue::Char('x'))).unwrap();
        assert_eq!(doc.topic.as_str(), "chars");
    }

    #[test]
    fn test_man_fuzzy_sets_notice() {
        let doc = desk().man(&HelpQuery::keyword("tupels")).unwrap();
        assert_eq!(doc.topic.as_str(), "tuples");
        assert!(doc.notice.unwrap().contains("`tupels`"));
    }

    #[test]
    fn test_man_unknown_is_resolution_error() {
        let err = desk().man(&HelpQuery::keyword("xyz-not-a-topic")).unwrap_err();
        assert!(matches!(
            err,
            HelpError::Resolution(ResolutionError::Unknown { .. })
        ));
    }

    #[test]
    fn test_fun_lists_macros_first() {
        let listing = desk().fun(&HelpQuery::keyword("floats"), FunOptions::default()).unwrap();
        assert!(listing.text.starts_with("Macros\n"));
        assert!(listing.text.contains("\nTrigonometric & Hyperbolic Operations\n"));
        assert!(!listing.text.contains("@printf"));
        assert!(listing.count > 0);
    }

    #[test]
    fn test_fun_extended_scope() {
        let desk = desk();
        let query = HelpQuery::keyword("strings");
        let core = desk.fun(&query, FunOptions::default()).unwrap();
        let all = desk.fun(&query, FunOptions { extended_scope: true }).unwrap();
        assert!(all.count > core.count);
        assert!(all.text.contains("@printf"));
    }

    #[test]
    fn test_fun_to_writes_notice_then_listing() {
        let mut out = Vec::new();
        desk()
            .fun_to(&HelpQuery::keyword("rationls"), FunOptions::default(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("note: no help topic named `rationls`"));
        assert!(text.contains("numerator"));
    }

    #[test]
    fn test_listing_rows_respect_configured_width() {
        let config = HelpConfig {
            max_width: 40,
            ..HelpConfig::default()
        };
        let desk = HelpDesk::with_config(&config).unwrap();
        let listing = desk
            .fun(&HelpQuery::keyword("files"), FunOptions { extended_scope: true })
            .unwrap();
        for line in listing.text.lines() {
            assert!(line.chars().count() <= 40, "{:?}", line);
        }
    }

    #[test]
    fn test_empty_listing_renders_message() {
        let listing = Listing {
            topic: Topic::new("keywords"),
            notice: None,
            text: String::new(),
            count: 0,
            extended: false,
        };
        assert_eq!(
            listing.render(),
            "No operations are registered for topic `keywords`.\n"
        );
    }

    #[test]
    fn test_topics_cover_every_topic() {
        let desk = desk();
        let topics = desk.topics();
        assert_eq!(topics.len(), desk.resolver().table().topics().count());
        let files = topics.iter().find(|t| t.topic.as_str() == "files").unwrap();
        assert!(files.synonyms.contains(&"io".to_string()));
        assert!(desk.render_topics().contains("keywords"));
    }
}
