/// This crate is a statistical domain-term discovery engine for Korean corpora.
pub mod engine;
pub mod error;
pub mod extractor;
pub mod utils;

/// Term Extractor
/// The top-level struct of this crate, providing the extraction pipeline.
/// It tokenizes a document collection into noun sequences, aggregates
/// unigram/bigram statistics in parallel, scores adjacent pairs with
/// PMI/NPMI and TF-IDF, and filters the survivors into a ranked candidate
/// list for glossary curation.
///
/// `TermExtractor<A>` is generic over the morphological analyzer `A`
/// (anything implementing `MorphAnalyzer`). The analyzer is the only
/// external capability the pipeline needs.
///
/// # Concurrency
/// The corpus analysis stage is data-parallel across documents; scoring,
/// filtering and ranking run single-threaded after a hard barrier, so no
/// candidate is ever scored from partial counts.
pub use extractor::TermExtractor;

/// Extraction Config structure
/// Per-run thresholds and term sets: minimum bigram count, NPMI and
/// relevance thresholds, caller stopwords, and curator-excluded terms.
/// Immutable once a run starts; build with the `with_*` methods.
pub use extractor::config::ExtractionConfig;

/// Extraction Result structure
/// The complete output of one run: total document count, unigram and
/// bigram statistics, the ranked candidate list, dictionary-candidate
/// recommendations, and any skipped documents. Created fresh per run and
/// immutable thereafter; nothing is persisted by this crate.
pub use extractor::stats::{
    BigramStat, CandidateStat, DictionaryCandidate, DictionaryConfidence, DictionaryReason,
    DocumentFailure, ExtractionResult, UnigramStat,
};

/// Filter Tables structure
/// The literal keyword/pattern tables driving the noise heuristics:
/// URL markers, technical-noise keywords, code fragments, built-in
/// stopwords, the monosyllable whitelist, and native affix patterns.
/// Serde-friendly so deployments can version them as configuration;
/// `Default` carries the built-in tuning.
pub use extractor::filter::tables::FilterTables;

/// Morphological Analyzer contract
/// The exact capability the extraction core requires from a tokenizer:
/// POS-tagged morphemes with char offsets. A dictionary-backed
/// implementation over lindera's ko-dic ships behind the `lindera-ko`
/// feature; `RuleBasedAnalyzer` is the dictionary-free fallback.
pub use engine::ko_tokenizer::{MorphAnalyzer, Morpheme, NounSequence, NounTokenizer, PosTag, Token};

pub use engine::ko_tokenizer::rule_based::RuleBasedAnalyzer;

#[cfg(feature = "lindera-ko")]
pub use engine::ko_tokenizer::lindera::LinderaAnalyzer;

/// Extraction Error
/// Configuration-level failures around the pluggable analyzer. Arithmetic
/// edge cases are never errors; the score calculator returns defined
/// zeros instead.
pub use error::ExtractError;
