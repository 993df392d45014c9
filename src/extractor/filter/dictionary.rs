//! Heuristic classifier for "this pair is one word the analyzer broke".
//!
//! A bigram whose halves essentially always co-occur is suspicious: a
//! real collocation scores high NPMI too, but a transliterated loanword
//! (쿠버네티스, 엘라스틱서치, ...) split into native-looking syllable
//! groups is near-certain. Flagged pairs feed a curator-facing
//! recommendation list for the analyzer's custom dictionary; they are
//! not part of the candidate ranking.

use crate::extractor::stats::{DictionaryCandidate, DictionaryConfidence, DictionaryReason};
use crate::utils::hangul;

use super::tables::FilterTables;

/// NPMI at or above this counts as "the components essentially always
/// appear together".
pub const HIGH_COOCCURRENCE_NPMI: f64 = 0.95;

fn is_loanword_half(component: &str) -> bool {
    hangul::all_syllables(component) && (2..=3).contains(&hangul::syllable_count(component))
}

fn is_single_syllable(component: &str) -> bool {
    let mut chars = component.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if hangul::is_syllable(c)
    )
}

fn all_korean(component: &str) -> bool {
    !component.is_empty() && component.chars().all(hangul::is_korean)
}

/// Classify a bigram. `None` means the pair does not look like a
/// dictionary gap.
pub fn detect_dictionary_candidate(
    components: &[String; 2],
    npmi: f64,
    tables: &FilterTables,
) -> Option<DictionaryCandidate> {
    if npmi < HIGH_COOCCURRENCE_NPMI {
        return None;
    }
    let [first, second] = components;

    let concatenated = format!("{first}{second}");
    let loanword_signal = is_loanword_half(first)
        && is_loanword_half(second)
        && !tables.looks_native(&concatenated);

    let (reason, confidence) = if loanword_signal {
        (DictionaryReason::LoanwordSplit, DictionaryConfidence::High)
    } else if (is_single_syllable(first) || is_single_syllable(second))
        && all_korean(first)
        && all_korean(second)
    {
        (
            DictionaryReason::SingleSyllableSplit,
            DictionaryConfidence::Medium,
        )
    } else {
        (
            DictionaryReason::HighCooccurrence,
            DictionaryConfidence::Medium,
        )
    };

    Some(DictionaryCandidate {
        components: components.clone(),
        npmi,
        reason,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    fn detect(a: &str, b: &str, npmi: f64) -> Option<DictionaryCandidate> {
        detect_dictionary_candidate(&pair(a, b), npmi, &FilterTables::default())
    }

    #[test]
    fn loanword_split_is_high_confidence() {
        // 쿠버네티스 broken at a syllable boundary
        let hit = detect("버네", "티스", 0.98).unwrap();
        assert_eq!(hit.reason, DictionaryReason::LoanwordSplit);
        assert_eq!(hit.confidence, DictionaryConfidence::High);
    }

    #[test]
    fn low_npmi_is_never_flagged() {
        assert!(detect("버네", "티스", 0.8).is_none());
        assert!(detect("공유", "주차장", 0.5).is_none());
    }

    #[test]
    fn native_affix_downgrades_to_plain_cooccurrence() {
        // "공유하기" ends in a native suffix, so no loanword signal
        let hit = detect("공유", "하기", 0.97).unwrap();
        assert_eq!(hit.reason, DictionaryReason::HighCooccurrence);
        assert_eq!(hit.confidence, DictionaryConfidence::Medium);
    }

    #[test]
    fn single_syllable_split_is_medium() {
        let hit = detect("버", "전역", 0.97).expect("expected a flag");
        assert_eq!(hit.reason, DictionaryReason::SingleSyllableSplit);
        assert_eq!(hit.confidence, DictionaryConfidence::Medium);
    }

    #[test]
    fn long_components_fall_back_to_cooccurrence() {
        // 4-syllable halves cannot be a 2-3 syllable loanword split
        let hit = detect("엘라스틱서치", "클러스터", 0.96).unwrap();
        assert_eq!(hit.reason, DictionaryReason::HighCooccurrence);
    }

    #[test]
    fn mixed_script_single_syllable_is_not_single_syllable_split() {
        let hit = detect("버", "api2", 0.97).unwrap();
        assert_eq!(hit.reason, DictionaryReason::HighCooccurrence);
    }
}
