//! Output data model of an extraction run.
//!
//! Everything here is created fresh per run and immutable afterwards;
//! nothing is persisted by this crate. All types derive serde so callers
//! can ship results across whatever boundary they like.

use serde::{Deserialize, Serialize};

/// Corpus-wide statistics of a single normalized term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnigramStat {
    pub term: String,
    /// Corpus-wide occurrence count.
    pub count: u64,
    /// Number of distinct documents containing the term.
    pub doc_count: u64,
}

/// Corpus-wide statistics of a normalized adjacent token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramStat {
    pub term1: String,
    pub term2: String,
    pub count: u64,
    pub doc_count: u64,
}

/// A scored candidate term.
///
/// `term` is the most frequently observed original surface phrase for the
/// bigram (natural spacing preserved); `components` are the two
/// normalized tokens it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateStat {
    pub term: String,
    pub components: [String; 2],
    pub count: u64,
    pub doc_count: u64,
    pub pmi: f64,
    /// Normalized PMI, in [-1, 1].
    pub npmi: f64,
    pub idf: f64,
    pub avg_tfidf: f64,
    /// Composite score, in [0, 1] for well-formed inputs.
    pub relevance_score: f64,
}

/// Why a bigram was flagged for the custom morphological dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionaryReason {
    /// A transliterated loanword split into native-looking halves.
    LoanwordSplit,
    /// Components nearly always co-occur.
    HighCooccurrence,
    /// One side is a lone syllable the analyzer broke off.
    SingleSyllableSplit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DictionaryConfidence {
    Medium,
    High,
}

/// A bigram that looks like one semantic unit wrongly split by the
/// analyzer. Surfaced separately from the candidate ranking so a curator
/// can feed the analyzer's custom dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryCandidate {
    pub components: [String; 2],
    pub npmi: f64,
    pub reason: DictionaryReason,
    pub confidence: DictionaryConfidence,
}

/// A document whose analysis failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    /// Index into the input document list.
    pub index: usize,
    pub message: String,
}

/// The complete result of one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub total_documents: u64,
    pub unigrams: Vec<UnigramStat>,
    pub ngrams: Vec<BigramStat>,
    /// Ranked by relevance score descending, term ascending on ties.
    pub candidates: Vec<CandidateStat>,
    /// Recommendations for the analyzer's custom dictionary.
    pub dictionary_candidates: Vec<DictionaryCandidate>,
    /// Documents skipped because their analysis failed.
    pub failed_documents: Vec<DocumentFailure>,
}
