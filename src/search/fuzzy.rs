//! Edit-distance scoring for "did you mean" topic suggestions

use crate::types::Topic;

/// Default acceptance threshold; a fuzzy match must score strictly above it
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// A keyword accepted as a near miss of the user's input
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub keyword: String,
    pub topic: Topic,
    pub score: f64,
}

/// Similarity in `[0, 1]` based on Damerau-Levenshtein distance,
/// normalized by the longer string. 1.0 means identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_damerau_levenshtein(a, b)
}

/// Best candidate scoring strictly above `threshold`.
///
/// Ties on score go to the lexicographically smallest topic, then the
/// smallest keyword, so the result never depends on candidate order.
pub fn best_match<'a, I>(input: &str, candidates: I, threshold: f64) -> Option<FuzzyMatch>
where
    I: IntoIterator<Item = (&'a str, &'a Topic)>,
{
    let mut best: Option<(f64, &Topic, &str)> = None;

    for (keyword, topic) in candidates {
        let score = similarity(input, keyword);
        if score <= threshold {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_score, best_topic, best_keyword)) => {
                score > best_score
                    || (score == best_score && (topic, keyword) < (best_topic, best_keyword))
            }
        };
        if better {
            best = Some((score, topic, keyword));
        }
    }

    best.map(|(score, topic, keyword)| FuzzyMatch {
        keyword: keyword.to_string(),
        topic: topic.clone(),
        score,
    })
}
