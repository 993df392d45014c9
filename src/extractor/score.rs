//! Closed-form association and weighting scores.
//!
//! Every function here is pure and total: degenerate inputs (a zero count
//! or total) return exactly `0.0` instead of propagating a `log(0)` or a
//! division by zero, since rare terms produce such inputs routinely. All
//! results are rounded half-up to 6 fractional digits so threshold
//! comparisons and ranking reproduce across runs.

use crate::utils::round::round6;

/// Weight of NPMI in the composite relevance score.
pub const NPMI_WEIGHT: f64 = 0.6;
/// Weight of the TF-IDF component in the composite relevance score.
pub const TFIDF_WEIGHT: f64 = 0.4;

/// Pointwise mutual information of an adjacent pair:
/// `log2(P(xy) / (P(x) * P(y)))`.
pub fn pmi(
    bigram_count: u64,
    unigram1_count: u64,
    unigram2_count: u64,
    total_bigrams: u64,
    total_unigrams: u64,
) -> f64 {
    if bigram_count == 0
        || unigram1_count == 0
        || unigram2_count == 0
        || total_bigrams == 0
        || total_unigrams == 0
    {
        return 0.0;
    }
    let p_xy = bigram_count as f64 / total_bigrams as f64;
    let p_x = unigram1_count as f64 / total_unigrams as f64;
    let p_y = unigram2_count as f64 / total_unigrams as f64;
    round6((p_xy / (p_x * p_y)).log2())
}

/// PMI normalized by the self-information of the joint event, into
/// [-1, 1]. Zero when the denominator degenerates (`P(xy)` of 0 or 1).
///
/// Unigram and bigram probabilities are measured on different event
/// totals, so small-sample estimates can drift past ±1; the range is
/// enforced here.
pub fn npmi(pmi: f64, bigram_count: u64, total_bigrams: u64) -> f64 {
    if bigram_count == 0 || total_bigrams == 0 {
        return 0.0;
    }
    let p_xy = bigram_count as f64 / total_bigrams as f64;
    let denom = -p_xy.log2();
    if denom == 0.0 {
        return 0.0;
    }
    round6((pmi / denom).clamp(-1.0, 1.0))
}

/// Inverse document frequency: `ln(total_docs / doc_count)`.
pub fn idf(doc_count: u64, total_docs: u64) -> f64 {
    if doc_count == 0 || total_docs == 0 {
        return 0.0;
    }
    round6((total_docs as f64 / doc_count as f64).ln())
}

/// Corpus-averaged TF-IDF: `(count / total_docs) * idf`.
pub fn avg_tfidf(count: u64, total_docs: u64, idf: f64) -> f64 {
    if total_docs == 0 {
        return 0.0;
    }
    round6(count as f64 / total_docs as f64 * idf)
}

/// Composite relevance: NPMI shifted into [0, 1] weighted against the
/// candidate's TF-IDF share of the run's maximum.
pub fn relevance_score(npmi: f64, avg_tfidf: f64, max_avg_tfidf: f64) -> f64 {
    let cooc = (npmi + 1.0) / 2.0 * NPMI_WEIGHT;
    let weight = if max_avg_tfidf > 0.0 {
        avg_tfidf / max_avg_tfidf * TFIDF_WEIGHT
    } else {
        0.0
    };
    round6(cooc + weight)
}
