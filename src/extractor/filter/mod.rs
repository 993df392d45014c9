//! Candidate noise filtering and deduplication.
//!
//! The exclusion pipeline is a boolean OR of independent predicates, each
//! targeting one observed failure mode of the corpus or the analyzer:
//! URL and markup debris, code fragments, stopword components, hash/ID
//! fragments, morphological over-splitting. The tables driving the
//! keyword predicates live in [`tables::FilterTables`].

pub mod dictionary;
pub mod tables;

use ahash::AHashSet;
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::extractor::stats::CandidateStat;
use crate::utils::hangul;

use tables::FilterTables;

/// Space-stripped, lowercased form used to compare spacing variants of
/// the same underlying phrase. Bare jamo are analyzer debris clinging to
/// a mis-split word and are ignored for comparison.
pub(crate) fn normalized_key(term: &str) -> String {
    term.chars()
        .filter(|c| !c.is_whitespace() && !hangul::is_jamo(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_single_ascii_non_digit(component: &str) -> bool {
    let mut chars = component.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii() && !c.is_ascii_digit(),
        _ => false,
    }
}

/// Hash/ID debris: 3+ chars drawn entirely from `[a-f0-9]`.
fn is_hex_like(component: &str) -> bool {
    component.chars().count() >= 3
        && component
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

fn is_single_syllable(component: &str) -> bool {
    let mut chars = component.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => hangul::is_syllable(c),
        _ => false,
    }
}

/// One component being a truncated prefix/suffix of the other marks an
/// analyzer double-segmentation ("공휴일" next to "공휴").
fn is_echo_pair(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.chars().count() < b.chars().count() {
        (a, b)
    } else if b.chars().count() < a.chars().count() {
        (b, a)
    } else {
        return false;
    };
    longer.starts_with(shorter) || longer.ends_with(shorter)
}

/// Decide whether a candidate is noise. Any matching predicate excludes;
/// the predicates are independent of each other.
pub fn should_exclude(
    term: &str,
    components: &[String; 2],
    stopwords: &AHashSet<String>,
    tables: &FilterTables,
) -> bool {
    let lower = term.to_lowercase();

    if tables.url_markers.iter().any(|m| lower.contains(m.as_str())) {
        return true;
    }
    if tables.noise_keywords.iter().any(|k| lower.contains(k.as_str())) {
        return true;
    }
    if tables.code_fragments.contains(lower.as_str()) {
        return true;
    }

    for component in components {
        let component_lower = component.to_lowercase();
        if tables.stopwords.contains(component_lower.as_str())
            || stopwords.contains(component_lower.as_str())
        {
            return true;
        }
        if is_single_ascii_non_digit(component) {
            return true;
        }
        if is_hex_like(&component_lower) {
            return true;
        }
        if is_single_syllable(component) && !tables.monosyllable_whitelist.contains(component.as_str())
        {
            return true;
        }
    }

    is_echo_pair(&components[0], &components[1])
}

/// Collapse duplicate candidates in two passes.
///
/// Pass 1 groups by the normalized key and keeps the best-scoring member
/// (ties: higher count, then lexicographically smaller term). Pass 2
/// drops any survivor whose key is a proper prefix or suffix of another
/// survivor's key (partial decompositions). Idempotent: running it on
/// its own output changes nothing.
pub fn remove_duplicates(candidates: Vec<CandidateStat>) -> Vec<CandidateStat> {
    let mut by_key: IndexMap<String, CandidateStat> = IndexMap::with_capacity(candidates.len());
    for candidate in candidates {
        match by_key.entry(normalized_key(&candidate.term)) {
            Entry::Occupied(mut slot) => {
                if replaces(&candidate, slot.get()) {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }

    let keys: Vec<String> = by_key.keys().cloned().collect();
    by_key
        .into_iter()
        .filter(|(key, _)| {
            !keys.iter().any(|other| {
                other.len() > key.len() && (other.starts_with(key.as_str()) || other.ends_with(key.as_str()))
            })
        })
        .map(|(_, candidate)| candidate)
        .collect()
}

fn replaces(challenger: &CandidateStat, incumbent: &CandidateStat) -> bool {
    challenger
        .relevance_score
        .total_cmp(&incumbent.relevance_score)
        .then_with(|| challenger.count.cmp(&incumbent.count))
        .then_with(|| incumbent.term.cmp(&challenger.term))
        .is_gt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    fn candidate(term: &str, score: f64, count: u64) -> CandidateStat {
        let mut parts = term.split_whitespace();
        let c1 = parts.next().unwrap_or(term).to_string();
        let c2 = parts.next().unwrap_or("").to_string();
        CandidateStat {
            term: term.to_string(),
            components: [c1, c2],
            count,
            doc_count: count,
            pmi: 0.0,
            npmi: 0.0,
            idf: 0.0,
            avg_tfidf: 0.0,
            relevance_score: score,
        }
    }

    fn exclude(term: &str, components: [String; 2]) -> bool {
        should_exclude(term, &components, &AHashSet::new(), &FilterTables::default())
    }

    #[test]
    fn url_and_noise_and_code_terms_are_excluded() {
        assert!(exclude("서비스 github.com", pair("서비스", "github.com")));
        assert!(exclude("다이어그램 mermaid", pair("다이어그램", "mermaid")));
        assert!(exclude("primary key", pair("primary", "key")));
        assert!(!exclude("공유 주차장", pair("공유", "주차장")));
    }

    #[test]
    fn stopword_components_are_excluded() {
        assert!(exclude("경우 주차장", pair("경우", "주차장")));
        let caller: AHashSet<String> = ["커스텀"].iter().map(|s| s.to_string()).collect();
        assert!(should_exclude(
            "커스텀 주차장",
            &pair("커스텀", "주차장"),
            &caller,
            &FilterTables::default(),
        ));
    }

    #[test]
    fn ascii_and_hex_fragments_are_excluded() {
        assert!(exclude("x 주차장", pair("x", "주차장")));
        assert!(!exclude("3 주차장", pair("3", "주차장"))); // digit is allowed
        assert!(exclude("3fa9c 주차장", pair("3fa9c", "주차장")));
        assert!(exclude("feed 주차장", pair("feed", "주차장")));
        assert!(!exclude("server 주차장", pair("server", "주차장"))); // 's' is not hex
    }

    #[test]
    fn monosyllable_split_respects_whitelist() {
        // over-split "버젼"
        assert!(exclude("버 젼", pair("버", "젼")));
        // numeral + counter are meaningful on their own
        assert!(!exclude("일 차", pair("일", "차")));
    }

    #[test]
    fn echo_pairs_are_excluded() {
        assert!(exclude("공휴일 공휴", pair("공휴일", "공휴")));
        assert!(exclude("휴일 공휴일", pair("휴일", "공휴일")));
        // identical components are not an echo
        assert!(!exclude("주차 주차", pair("주차", "주차")));
        // overlap in the middle is not an echo
        assert!(!exclude("공유 유주차", pair("공유", "유주차")));
    }

    #[test]
    fn dedup_collapses_spacing_variants_keeping_best_score() {
        let out = remove_duplicates(vec![
            candidate("주차장 주차", 0.9, 4),
            candidate("주차 장주차", 0.7, 9),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].term, "주차장 주차");
    }

    #[test]
    fn dedup_drops_partial_decompositions() {
        // the stray jamo is ignored, leaving a proper prefix
        let out = remove_duplicates(vec![
            candidate("마이그레이션", 0.9, 5),
            candidate("마이그레이 ᄀ", 0.8, 3),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].term, "마이그레이션");

        let out = remove_duplicates(vec![
            candidate("마이그레이션", 0.9, 5),
            candidate("마이그레이", 0.8, 3),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].term, "마이그레이션");
    }

    #[test]
    fn dedup_drops_suffix_decompositions_too() {
        let out = remove_duplicates(vec![
            candidate("공유 주차장", 0.9, 5),
            candidate("주차장", 0.95, 3),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].term, "공유 주차장");
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![
            candidate("주차장 주차", 0.9, 4),
            candidate("주차 장주차", 0.7, 9),
            candidate("마이그레이션", 0.9, 5),
            candidate("마이그레이", 0.8, 3),
            candidate("공유 오피스", 0.6, 2),
        ];
        let once = remove_duplicates(input);
        let twice = remove_duplicates(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn dedup_tie_breaks_deterministically() {
        // equal scores: higher count wins
        let out = remove_duplicates(vec![
            candidate("공유주차장", 0.9, 2),
            candidate("공유 주차장", 0.9, 7),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].term, "공유 주차장");
    }
}
