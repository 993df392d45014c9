//! Extraction orchestrator.
//!
//! Wires the tokenizer adapter, corpus analyzer, score calculator and
//! candidate filter into one `extract` call. The parallel analysis stage
//! completes fully before any scoring happens; everything after that
//! barrier is single-threaded and deterministic, including tie-breaking.

pub mod analyze;
pub mod config;
pub mod filter;
pub mod score;
pub mod stats;

use log::debug;

use crate::engine::ko_tokenizer::{MorphAnalyzer, NounTokenizer};

use analyze::{analyze_corpus, CorpusCounts};
use config::ExtractionConfig;
use filter::dictionary::detect_dictionary_candidate;
use filter::tables::FilterTables;
use stats::{BigramStat, CandidateStat, DictionaryCandidate, ExtractionResult, UnigramStat};

/// Discovers candidate domain terms from a document corpus.
///
/// Holds the tokenizer adapter and the heuristic filter tables; all
/// per-run state lives in [`ExtractionConfig`] and the returned
/// [`ExtractionResult`].
#[derive(Debug, Clone)]
pub struct TermExtractor<A> {
    tokenizer: NounTokenizer<A>,
    tables: FilterTables,
}

impl<A: MorphAnalyzer> TermExtractor<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            tokenizer: NounTokenizer::new(analyzer),
            tables: FilterTables::default(),
        }
    }

    /// Swap in externally versioned filter tables.
    pub fn with_tables(mut self, tables: FilterTables) -> Self {
        self.tables = tables;
        self
    }

    /// Run the full pipeline over a fixed document set.
    ///
    /// Never fails: an empty corpus produces an empty result, and a
    /// document whose analysis fails is recorded in
    /// [`ExtractionResult::failed_documents`] and skipped.
    pub fn extract<T>(&self, documents: &[T], config: &ExtractionConfig) -> ExtractionResult
    where
        T: AsRef<str> + Sync,
    {
        let counts = analyze_corpus(&self.tokenizer, documents);
        let total_docs = documents.len() as u64;

        let unigrams = unigram_stats(&counts);
        let ngrams = bigram_stats(&counts);
        let (candidates, dictionary_candidates) =
            self.build_candidates(&counts, total_docs, config);

        ExtractionResult {
            total_documents: total_docs,
            unigrams,
            ngrams,
            candidates,
            dictionary_candidates,
            failed_documents: counts.failures,
        }
    }

    fn build_candidates(
        &self,
        counts: &CorpusCounts,
        total_docs: u64,
        config: &ExtractionConfig,
    ) -> (Vec<CandidateStat>, Vec<DictionaryCandidate>) {
        let total_unigrams = counts.total_unigrams();
        let total_bigrams = counts.total_bigrams();

        let mut dictionary_candidates = Vec::new();
        let mut scored = Vec::new();

        for (bigram, &count) in &counts.bigram_counts {
            if count < config.min_count {
                continue;
            }
            let components = [bigram.first.clone(), bigram.second.clone()];
            let u1 = counts.unigram_counts.get(&bigram.first).copied().unwrap_or(0);
            let u2 = counts.unigram_counts.get(&bigram.second).copied().unwrap_or(0);
            let pmi = score::pmi(count, u1, u2, total_bigrams, total_unigrams);
            let npmi = score::npmi(pmi, count, total_bigrams);

            // dictionary detection sees every frequent pair, including
            // the ones the exclusion pipeline is about to remove: the
            // over-split pairs are exactly the interesting ones
            if let Some(hit) = detect_dictionary_candidate(&components, npmi, &self.tables) {
                dictionary_candidates.push(hit);
            }

            let term = counts
                .top_phrase(bigram)
                .map(str::to_string)
                .unwrap_or_else(|| bigram.joined());
            let normalized = term.to_lowercase();
            let space_free = filter::normalized_key(&term);
            if config.excluded_terms.contains(&normalized)
                || config.excluded_terms.contains(&space_free)
            {
                continue;
            }
            if filter::should_exclude(&term, &components, &config.stopwords, &self.tables) {
                continue;
            }
            if npmi < config.npmi_threshold {
                continue;
            }

            let doc_count = counts.bigram_doc_counts.get(bigram).copied().unwrap_or(0);
            let idf = score::idf(doc_count, total_docs);
            let avg_tfidf = score::avg_tfidf(count, total_docs, idf);

            scored.push(CandidateStat {
                term,
                components,
                count,
                doc_count,
                pmi,
                npmi,
                idf,
                avg_tfidf,
                relevance_score: 0.0,
            });
        }
        debug!(
            "{} bigrams survived count/noise/npmi gates, {} dictionary hits",
            scored.len(),
            dictionary_candidates.len()
        );

        // relevance needs the corpus-wide TF-IDF maximum, so it is a
        // second pass over the survivors
        let max_avg_tfidf = scored.iter().map(|c| c.avg_tfidf).fold(0.0, f64::max);
        for candidate in &mut scored {
            candidate.relevance_score =
                score::relevance_score(candidate.npmi, candidate.avg_tfidf, max_avg_tfidf);
        }
        scored.retain(|c| c.relevance_score >= config.relevance_threshold);

        let mut candidates = filter::remove_duplicates(scored);
        candidates.sort_by(|a, b| {
            b.relevance_score
                .total_cmp(&a.relevance_score)
                .then_with(|| a.term.cmp(&b.term))
        });

        dictionary_candidates.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.components.cmp(&b.components))
        });

        (candidates, dictionary_candidates)
    }
}

fn unigram_stats(counts: &CorpusCounts) -> Vec<UnigramStat> {
    let mut stats: Vec<UnigramStat> = counts
        .unigram_counts
        .iter()
        .map(|(term, &count)| UnigramStat {
            term: term.clone(),
            count,
            doc_count: counts.unigram_doc_counts.get(term).copied().unwrap_or(0),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    stats
}

fn bigram_stats(counts: &CorpusCounts) -> Vec<BigramStat> {
    let mut stats: Vec<BigramStat> = counts
        .bigram_counts
        .iter()
        .map(|(bigram, &count)| BigramStat {
            term1: bigram.first.clone(),
            term2: bigram.second.clone(),
            count,
            doc_count: counts.bigram_doc_counts.get(bigram).copied().unwrap_or(0),
        })
        .collect();
    stats.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.term1.cmp(&b.term1))
            .then_with(|| a.term2.cmp(&b.term2))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ko_tokenizer::rule_based::RuleBasedAnalyzer;

    fn extractor() -> TermExtractor<RuleBasedAnalyzer> {
        TermExtractor::new(RuleBasedAnalyzer::new())
    }

    fn permissive() -> ExtractionConfig {
        ExtractionConfig::new()
            .with_min_count(2)
            .with_npmi_threshold(-1.0)
            .with_relevance_threshold(0.0)
    }

    #[test]
    fn excluded_terms_match_space_free_form() {
        let docs = ["공유 주차장", "공유 주차장", "공유 주차장"];
        let config = permissive().with_excluded_terms(["공유주차장"]);
        let result = extractor().extract(&docs, &config);
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn npmi_threshold_gates_candidates() {
        let docs = ["공유 주차장", "공유 주차장"];
        let config = permissive().with_npmi_threshold(1.1); // unreachable
        let result = extractor().extract(&docs, &config);
        assert!(result.candidates.is_empty());
        // statistics are still reported
        assert!(!result.ngrams.is_empty());
    }

    #[test]
    fn min_count_gates_candidates() {
        let docs = ["공유 주차장"];
        let result = extractor().extract(&docs, &permissive().with_min_count(2));
        assert!(result.candidates.is_empty());
        assert_eq!(result.ngrams[0].count, 1);
    }

    #[test]
    fn stats_are_sorted_by_count_then_term() {
        let docs = ["공유 주차장 예약", "공유 주차장"];
        let result = extractor().extract(&docs, &permissive());
        assert_eq!(result.unigrams[0].term, "공유");
        assert_eq!(result.unigrams[1].term, "주차장");
        assert!(result.unigrams[0].count >= result.unigrams[1].count);
    }
}
