//! Help registry: the documentation store and the operation tables
//!
//! Stands in for runtime reflection. Every topic has an authored document
//! and a curated list of `(category, operation)` pairs, split into the
//! default namespace and an extended scope.

mod docs;
mod operations;

pub use docs::{TopicDoc, TOPIC_DOCS};
pub use operations::{TopicOperations, TOPIC_OPERATIONS};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{HelpError, HelpResult};
use crate::search::{normalize_keyword, SynonymTable};
use crate::types::{CategoryGroup, DocumentRecord, OperationEntry, Topic};

#[derive(Debug, Clone)]
struct DocEntry {
    title: String,
    body: String,
    see_also: Vec<Topic>,
}

/// Documents and operations keyed by topic. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct HelpRegistry {
    docs: HashMap<Topic, DocEntry>,
    operations: HashMap<Topic, Vec<OperationEntry>>,
}

impl HelpRegistry {
    /// Registry holding the built-in documents and operation tables
    pub fn builtin() -> Self {
        let mut registry = HelpRegistry::default();

        for doc in TOPIC_DOCS {
            registry.docs.insert(
                Topic::new(doc.topic),
                DocEntry {
                    title: doc.title.to_string(),
                    body: doc.body.to_string(),
                    see_also: doc.see_also.iter().map(|t| Topic::new(*t)).collect(),
                },
            );
        }

        for table in TOPIC_OPERATIONS {
            let core = table.core.iter().flat_map(|(category, names)| {
                names.iter().map(move |name| OperationEntry::core(*category, *name))
            });
            let extended = table.extended.iter().flat_map(|(category, names)| {
                names.iter().map(move |name| OperationEntry::extended(*category, *name))
            });
            registry
                .operations
                .entry(Topic::new(table.topic))
                .or_default()
                .extend(core.chain(extended));
        }

        registry
    }

    /// Replace document bodies with `<topic>.md` files from `dir`.
    ///
    /// A leading `# Heading` line becomes the title. Files that name no known
    /// topic are skipped with a warning.
    pub fn with_docs_dir(mut self, dir: &Path) -> HelpResult<Self> {
        let mut loaded = 0usize;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let topic = Topic::new(normalize_keyword(stem));
            let Some(doc) = self.docs.get_mut(&topic) else {
                log::warn!("skipping {}: no topic named `{}`", path.display(), stem);
                continue;
            };

            let content = fs::read_to_string(&path)?;
            match content.strip_prefix("# ").and_then(|rest| rest.split_once('\n')) {
                Some((heading, body)) => {
                    doc.title = heading.trim().to_string();
                    doc.body = body.trim_start_matches('\n').to_string();
                }
                None => doc.body = content,
            }
            loaded += 1;
        }
        log::info!("loaded {} topic documents from {}", loaded, dir.display());
        Ok(self)
    }

    /// Check that every topic the resolver can produce has a document
    /// and that cross references point at known topics
    pub fn validate(&self, table: &SynonymTable) -> HelpResult<()> {
        for topic in table.topics() {
            if !self.docs.contains_key(topic) {
                return Err(HelpError::Config(format!(
                    "topic `{}` has no document",
                    topic
                )));
            }
            if !self.operations.contains_key(topic) {
                log::debug!("topic `{}` has no registered operations", topic);
            }
        }
        for (topic, doc) in &self.docs {
            if let Some(missing) = doc.see_also.iter().find(|t| !self.docs.contains_key(*t)) {
                return Err(HelpError::Config(format!(
                    "topic `{}` refers to unknown topic `{}`",
                    topic, missing
                )));
            }
        }
        Ok(())
    }

    /// The document for a topic, without any resolution notice
    pub fn document(&self, topic: &Topic) -> Option<DocumentRecord> {
        self.docs.get(topic).map(|doc| DocumentRecord {
            topic: topic.clone(),
            title: doc.title.clone(),
            body: doc.body.clone(),
            see_also: doc.see_also.clone(),
            notice: None,
        })
    }

    pub fn title(&self, topic: &Topic) -> Option<&str> {
        self.docs.get(topic).map(|doc| doc.title.as_str())
    }

    /// Operations for a topic grouped by category. Extended-scope entries
    /// are included only when `extended` is set.
    pub fn operations(&self, topic: &Topic, extended: bool) -> CategoryGroup {
        self.operations
            .get(topic)
            .into_iter()
            .flatten()
            .filter(|op| extended || !op.extended)
            .map(|op| (op.category, op.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::io::Write;

    #[test]
    fn test_builtin_registry_is_consistent() {
        let registry = HelpRegistry::builtin();
        let table = SynonymTable::builtin().unwrap();
        registry.validate(&table).unwrap();

        for topic in table.topics() {
            assert!(registry.document(topic).is_some(), "{}", topic);
        }
    }

    #[test]
    fn test_every_operation_table_names_a_known_topic() {
        let table = SynonymTable::builtin().unwrap();
        for ops in TOPIC_OPERATIONS {
            assert!(table.contains_topic(ops.topic), "{}", ops.topic);
        }
    }

    #[test]
    fn test_extended_scope_adds_operations() {
        let registry = HelpRegistry::builtin();
        let topic = Topic::new("integers");
        let core = registry.operations(&topic, false);
        let all = registry.operations(&topic, true);

        assert!(all.len() > core.len());
        let arithmetic = core.names(Category::Arithmetic).unwrap();
        assert!(!arithmetic.contains("checked_add"));
        assert!(all.names(Category::Arithmetic).unwrap().contains("checked_add"));
    }

    #[test]
    fn test_unknown_topic_has_no_operations() {
        let registry = HelpRegistry::builtin();
        assert!(registry.operations(&Topic::new("nope"), true).is_empty());
        assert!(registry.document(&Topic::new("nope")).is_none());
    }

    #[test]
    fn test_docs_dir_overrides_body_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("regex.md")).unwrap();
        writeln!(file, "# Regex cheat sheet\n\nUse r\"...\" literals.").unwrap();
        fs::write(dir.path().join("unknown-topic.md"), "ignored").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let registry = HelpRegistry::builtin().with_docs_dir(dir.path()).unwrap();
        let doc = registry.document(&Topic::new("regex")).unwrap();
        assert_eq!(doc.title, "Regex cheat sheet");
        assert_eq!(doc.body, "Use r\"...\" literals.\n");

        // untouched topics keep the built-in text
        assert_eq!(registry.title(&Topic::new("sets")), Some("Sets"));
    }

    #[test]
    fn test_missing_docs_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            HelpRegistry::builtin().with_docs_dir(&missing),
            Err(HelpError::Io(_))
        ));
    }
}
