//! Synonym dictionary mapping alternate keywords to canonical topics

use std::collections::{BTreeMap, HashMap};

use crate::error::{HelpError, HelpResult};
use crate::types::Topic;

/// Canonical topics and the alternate keywords that resolve to them
pub const TOPIC_SYNONYMS: &[(&str, &[&str])] = &[
    // Numbers
    (
        "integers",
        &["int", "integer", "ints", "int64", "whole numbers", "bigint"],
    ),
    (
        "floats",
        &[
            "float",
            "floating point",
            "float64",
            "decimals",
            "reals",
            "real numbers",
        ],
    ),
    ("rationals", &["rational", "fractions", "fraction"]),
    ("complex", &["complex numbers", "imaginary", "complexf64"]),
    ("booleans", &["bool", "boolean", "logic", "truth values"]),
    // Text
    ("chars", &["char", "character", "characters", "unicode"]),
    ("strings", &["string", "str", "text", "substring"]),
    (
        "regex",
        &[
            "regexes",
            "regexp",
            "regular expression",
            "regular expressions",
            "patterns",
        ],
    ),
    ("symbols", &["symbol", "interned strings"]),
    // Collections
    (
        "arrays",
        &["array", "vector", "vectors", "matrix", "matrices", "lists"],
    ),
    ("tuples", &["tuple", "namedtuple", "named tuples"]),
    (
        "dicts",
        &[
            "dict",
            "dictionary",
            "dictionaries",
            "hashmap",
            "maps",
            "associative arrays",
        ],
    ),
    ("sets", &["set", "bitset"]),
    ("ranges", &["range", "unitrange", "steprange", "sequences"]),
    // Language
    (
        "functions",
        &["function", "methods", "lambdas", "closures", "anonymous functions"],
    ),
    (
        "keywords",
        &["keyword", "reserved", "reserved words", "syntax"],
    ),
    ("types", &["type", "datatypes", "structs", "type system"]),
    ("nothing", &["null", "none", "nil", "void"]),
    // I/O
    (
        "files",
        &[
            "file",
            "io",
            "input",
            "output",
            "streams",
            "filesystem",
            "iostream",
        ],
    ),
];

/// Normalize a keyword for lookup: trimmed, lowercased, and with runs of
/// whitespace, `_` and `-` collapsed to one space
pub fn normalize_keyword(keyword: &str) -> String {
    keyword
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword → topic table, built once and read-only afterwards.
///
/// Every known keyword (canonical names included) maps to exactly one topic.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    keywords: HashMap<String, Topic>,
    synonyms: BTreeMap<Topic, Vec<String>>,
}

impl SynonymTable {
    /// Build the table shipped with the crate
    pub fn builtin() -> HelpResult<Self> {
        Self::from_groups(TOPIC_SYNONYMS)
    }

    /// Build a table from `(topic, synonyms)` groups.
    ///
    /// Fails if any keyword would map to two different topics.
    pub fn from_groups(groups: &[(&str, &[&str])]) -> HelpResult<Self> {
        let mut table = SynonymTable::default();

        // Canonical names first so a synonym cannot shadow another topic
        for (topic, _) in groups {
            let topic = Topic::new(normalize_keyword(topic));
            table.insert_keyword(topic.as_str().to_string(), &topic)?;
            table.synonyms.entry(topic).or_default();
        }

        for (topic, synonyms) in groups {
            let topic = Topic::new(normalize_keyword(topic));
            for synonym in *synonyms {
                let keyword = normalize_keyword(synonym);
                if table.insert_keyword(keyword.clone(), &topic)? {
                    table.synonyms.entry(topic.clone()).or_default().push(keyword);
                }
            }
        }

        Ok(table)
    }

    /// Returns true if the keyword was newly added
    fn insert_keyword(&mut self, keyword: String, topic: &Topic) -> HelpResult<bool> {
        match self.keywords.get(&keyword) {
            Some(existing) if existing == topic => Ok(false),
            Some(existing) => Err(HelpError::SynonymConflict {
                keyword,
                first: existing.to_string(),
                second: topic.to_string(),
            }),
            None => {
                self.keywords.insert(keyword, topic.clone());
                Ok(true)
            }
        }
    }

    /// Exact lookup of an already-normalized keyword
    pub fn lookup(&self, keyword: &str) -> Option<&Topic> {
        self.keywords.get(keyword)
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.synonyms.contains_key(topic)
    }

    /// Canonical topics in lexicographic order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.synonyms.keys()
    }

    /// Synonyms of a topic (canonical name excluded)
    pub fn synonyms(&self, topic: &str) -> &[String] {
        self.synonyms.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every known keyword with its topic
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Topic)> {
        self.keywords.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
