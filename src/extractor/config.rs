//! Per-run extraction parameters.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Thresholds and term sets for one extraction run. Immutable once the
/// run starts; build with the `with_*` methods and hand it to
/// [`crate::TermExtractor::extract`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Bigrams below this corpus-wide count are never scored.
    pub min_count: u64,
    /// Candidates with NPMI below this are rejected.
    pub npmi_threshold: f64,
    /// Candidates with a composite relevance score below this are rejected.
    pub relevance_threshold: f64,
    /// Caller-supplied stopwords, merged with the built-in table.
    pub stopwords: AHashSet<String>,
    /// Terms already known (glossary) or explicitly excluded by curators.
    /// Matched against the normalized term and its space-free form.
    pub excluded_terms: AHashSet<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_count: 3,
            npmi_threshold: 0.3,
            relevance_threshold: 0.4,
            stopwords: AHashSet::new(),
            excluded_terms: AHashSet::new(),
        }
    }
}

impl ExtractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    pub fn with_npmi_threshold(mut self, threshold: f64) -> Self {
        self.npmi_threshold = threshold;
        self
    }

    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_excluded_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_terms
            .extend(terms.into_iter().map(|t| t.into().to_lowercase()));
        self
    }
}
