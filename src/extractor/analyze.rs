//! Parallel corpus aggregation.
//!
//! Documents are independent, so the analysis stage fans out with rayon:
//! each worker tokenizes one document into a local [`CorpusCounts`] and a
//! reducer merges the partials. Merging is purely additive, so the final
//! aggregates cannot depend on scheduling order. Map iteration order can
//! differ between runs; every consumer sorts before emitting.

use ahash::AHashSet;
use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

use crate::engine::ko_tokenizer::{MorphAnalyzer, NounTokenizer};
use crate::extractor::stats::DocumentFailure;

/// Normalized form used as the statistics key.
#[inline]
pub(crate) fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// A normalized adjacent token pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram {
    pub first: String,
    pub second: String,
}

impl Bigram {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The fallback surface form: components joined by a space.
    pub fn joined(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

/// Aggregated corpus counts. Frequency maps count occurrences; the
/// `*_doc_counts` maps count document presence; `phrase_counts` records,
/// per bigram, how often each literal surface phrase was observed.
#[derive(Debug, Default, Clone)]
pub struct CorpusCounts {
    pub unigram_counts: IndexMap<String, u64>,
    pub unigram_doc_counts: IndexMap<String, u64>,
    pub bigram_counts: IndexMap<Bigram, u64>,
    pub bigram_doc_counts: IndexMap<Bigram, u64>,
    pub phrase_counts: IndexMap<Bigram, IndexMap<String, u64>>,
    pub failures: Vec<DocumentFailure>,
}

impl CorpusCounts {
    /// Total token occurrences across the corpus.
    pub fn total_unigrams(&self) -> u64 {
        self.unigram_counts.values().sum()
    }

    /// Total adjacent-pair occurrences across the corpus.
    pub fn total_bigrams(&self) -> u64 {
        self.bigram_counts.values().sum()
    }

    /// Additive merge of two partial counts. Commutative and associative
    /// up to map iteration order, which no consumer relies on.
    pub fn merge(mut self, other: CorpusCounts) -> CorpusCounts {
        for (term, count) in other.unigram_counts {
            *self.unigram_counts.entry(term).or_insert(0) += count;
        }
        for (term, count) in other.unigram_doc_counts {
            *self.unigram_doc_counts.entry(term).or_insert(0) += count;
        }
        for (bigram, count) in other.bigram_counts {
            *self.bigram_counts.entry(bigram).or_insert(0) += count;
        }
        for (bigram, count) in other.bigram_doc_counts {
            *self.bigram_doc_counts.entry(bigram).or_insert(0) += count;
        }
        for (bigram, phrases) in other.phrase_counts {
            let entry = self.phrase_counts.entry(bigram).or_default();
            for (phrase, count) in phrases {
                *entry.entry(phrase).or_insert(0) += count;
            }
        }
        self.failures.extend(other.failures);
        self
    }

    /// The most frequently observed literal phrase for a bigram. Ties
    /// break to the lexicographically smallest phrase so reruns agree.
    pub fn top_phrase(&self, bigram: &Bigram) -> Option<&str> {
        self.phrase_counts.get(bigram).and_then(|phrases| {
            phrases
                .iter()
                .max_by(|(pa, ca), (pb, cb)| ca.cmp(cb).then_with(|| pb.cmp(pa)))
                .map(|(phrase, _)| phrase.as_str())
        })
    }
}

/// Counts contributed by a single document.
fn analyze_document<A: MorphAnalyzer>(
    tokenizer: &NounTokenizer<A>,
    index: usize,
    text: &str,
) -> CorpusCounts {
    let mut counts = CorpusCounts::default();

    let sequences = match tokenizer.tokenize(text) {
        Ok(sequences) => sequences,
        Err(e) => {
            warn!("document {index} skipped: {e}");
            counts.failures.push(DocumentFailure {
                index,
                message: e.to_string(),
            });
            return counts;
        }
    };

    let mut seen_unigrams: AHashSet<String> = AHashSet::new();
    let mut seen_bigrams: AHashSet<Bigram> = AHashSet::new();

    for sequence in &sequences {
        let tokens = sequence.tokens();
        for token in tokens {
            let term = normalize(&token.term);
            *counts.unigram_counts.entry(term.clone()).or_insert(0) += 1;
            seen_unigrams.insert(term);
        }
        for i in 0..tokens.len() - 1 {
            let bigram = Bigram::new(normalize(&tokens[i].term), normalize(&tokens[i + 1].term));
            *counts.bigram_counts.entry(bigram.clone()).or_insert(0) += 1;
            let phrase = sequence.phrase(text, i, i + 1);
            *counts
                .phrase_counts
                .entry(bigram.clone())
                .or_default()
                .entry(phrase)
                .or_insert(0) += 1;
            seen_bigrams.insert(bigram);
        }
    }

    // presence, exactly once per document
    for term in seen_unigrams {
        counts.unigram_doc_counts.insert(term, 1);
    }
    for bigram in seen_bigrams {
        counts.bigram_doc_counts.insert(bigram, 1);
    }

    counts
}

/// Tokenize every document in parallel and reduce the partial counts.
pub fn analyze_corpus<A, T>(tokenizer: &NounTokenizer<A>, documents: &[T]) -> CorpusCounts
where
    A: MorphAnalyzer,
    T: AsRef<str> + Sync,
{
    let mut counts = documents
        .par_iter()
        .enumerate()
        .map(|(index, text)| analyze_document(tokenizer, index, text.as_ref()))
        .reduce(CorpusCounts::default, CorpusCounts::merge);

    counts.failures.sort_by_key(|f| f.index);
    debug!(
        "analyzed {} documents: {} unigrams, {} bigrams, {} failures",
        documents.len(),
        counts.unigram_counts.len(),
        counts.bigram_counts.len(),
        counts.failures.len()
    );
    counts
}
