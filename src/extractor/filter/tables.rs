//! Heuristic data tables for the candidate filter.
//!
//! The noise heuristics are driven by literal keyword tables tuned
//! against real corpora. They live in one serde-friendly struct so a
//! deployment can version and reload them as configuration instead of
//! recompiling; `Default` carries the built-in tuning.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTables {
    /// Substrings that mark a term as URL debris: protocols, domain
    /// suffixes, and SaaS product names that leak out of pasted links.
    pub url_markers: Vec<String>,
    /// Substrings that mark diagram/markup/CDN/image artifacts.
    pub noise_keywords: Vec<String>,
    /// Exact code-syntax fragments (SQL, diagram DSLs).
    pub code_fragments: AHashSet<String>,
    /// Built-in stopwords, merged with the caller's per-run set.
    pub stopwords: AHashSet<String>,
    /// Single Hangul syllables that are real words on their own:
    /// numerals, counters, time units, directional nouns.
    pub monosyllable_whitelist: AHashSet<String>,
    /// Native-Korean suffix patterns. A concatenated pair ending in one
    /// of these reads as native morphology, not a split loanword.
    pub native_suffixes: Vec<String>,
    /// Native-Korean prefix patterns, same role as `native_suffixes`.
    pub native_prefixes: Vec<String>,
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn string_set(list: &[&str]) -> AHashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for FilterTables {
    fn default() -> Self {
        Self {
            url_markers: strings(&[
                "http://", "https://", "www.", ".com", ".net", ".org", ".io", ".dev",
                ".co.kr", ".kr", "github", "gitlab", "bitbucket", "slack", "notion",
                "jira", "confluence", "figma", "youtube", "googledocs",
            ]),
            noise_keywords: strings(&[
                "mermaid", "flowchart", "subgraph", "sequencediagram", "classdiagram",
                "svg", "png", "jpg", "jpeg", "gif", "webp", "cdn", "cloudfront",
                "thumbnail", "base64", "iframe", "href", "srcset",
            ]),
            code_fragments: string_set(&[
                "select", "insert", "update", "delete", "join", "where", "group by",
                "order by", "varchar", "not null", "primary key", "foreign key",
                "graph td", "graph lr", "graph rl", "graph bt",
            ]),
            stopwords: string_set(&[
                // function-ish nouns the analyzer tags as NNG/NNB
                "경우", "때문", "정도", "관련", "대한", "위한", "통해", "이번", "저번",
                "다음", "이전", "이후", "오늘", "내일", "어제", "지금", "현재", "모든",
                "여기", "저기", "거기", "우리", "저희", "자신", "각각", "모두", "전체",
                "부분", "일부", "하나", "여러", "기타", "등등", "내용", "사항", "부탁",
                "확인", "감사", "안녕", "여부",
                // english glue that survives mixed-script tokens
                "the", "and", "for", "with", "from", "this", "that",
            ]),
            monosyllable_whitelist: string_set(&[
                // native and Sino-Korean numerals
                "일", "이", "삼", "사", "오", "육", "칠", "팔", "구", "십", "백", "천",
                "만", "억", "조", "몇",
                // counters and units
                "개", "명", "번", "회", "차", "대", "장", "권", "살", "원", "건", "층",
                // time
                "년", "월", "주", "시", "분", "초", "날", "밤", "낮",
                // directional / positional nouns
                "앞", "뒤", "위", "밑", "옆", "안", "밖", "곁", "끝", "쪽", "동", "서",
                "남", "북", "좌", "우",
            ]),
            native_suffixes: strings(&[
                "하기", "하는", "해서", "했다", "한다", "된다", "되는", "되기", "됐다",
                "이다", "인데", "니다", "세요", "어요", "아요", "스럽", "답다", "하게",
                "으로", "에서", "부터", "까지", "에게", "마다",
            ]),
            native_prefixes: strings(&[
                "재", "비", "불", "무", "미", "초", "최", "신", "구", "총", "각", "매",
                "준", "반",
            ]),
        }
    }
}

impl FilterTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the concatenation of a component pair matches a native
    /// affix pattern (so it reads as Korean morphology rather than a
    /// split transliteration).
    pub fn looks_native(&self, concatenated: &str) -> bool {
        self.native_suffixes.iter().any(|s| concatenated.ends_with(s.as_str()))
            || self.native_prefixes.iter().any(|p| concatenated.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let tables = FilterTables::default();
        assert!(tables.url_markers.iter().any(|m| m == ".com"));
        assert!(tables.stopwords.contains("경우"));
        assert!(tables.monosyllable_whitelist.contains("일"));
        assert!(tables.monosyllable_whitelist.contains("차"));
    }

    #[test]
    fn looks_native_matches_affixes() {
        let tables = FilterTables::default();
        assert!(tables.looks_native("공유하기"));
        assert!(tables.looks_native("재시작"));
        // a transliterated fragment pair matches neither list
        assert!(!tables.looks_native("버네티스"));
    }

    #[test]
    fn tables_round_trip_as_configuration() {
        // partial table files are valid: unspecified fields fall back
        let tables: FilterTables =
            serde_json::from_str(r#"{"url_markers": ["internal.example"]}"#).unwrap();
        assert_eq!(tables.url_markers, vec!["internal.example".to_string()]);
        assert!(tables.stopwords.contains("경우"));
    }
}
