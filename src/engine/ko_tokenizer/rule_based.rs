//! Rule-based analyzer: whitespace segmentation plus trailing-particle
//! stripping. No dictionary required.
//!
//! This is the fallback when no dictionary-backed analyzer is compiled in,
//! and the deterministic vehicle for tests. It is deliberately naive: a
//! word of Hangul is assumed to be a noun, optionally carrying one
//! trailing particle, which is emitted separately so downstream grouping
//! sees the same shape a real analyzer produces.

use crate::error::ExtractError;
use crate::utils::hangul;

use super::{MorphAnalyzer, Morpheme, PosTag};

/// Two-char particles checked before the single-char set. Order matters
/// only in that longer suffixes win.
const PARTICLES_2: &[&str] = &[
    "에서", "부터", "까지", "으로", "한테", "처럼", "같이", "보다", "마다", "조차", "라고",
];

const PARTICLES_1: &[char] = &[
    '은', '는', '이', '가', '을', '를', '에', '의', '로', '도', '만', '와', '과',
];

/// Whitespace-and-particle analyzer implementing [`MorphAnalyzer`].
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn emit_word(&self, word: &str, start: usize, out: &mut Vec<Morpheme>) {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        if !hangul::contains_korean(word) {
            let pos = if chars.iter().all(|c| c.is_ascii_digit()) {
                PosTag::Numeral
            } else {
                PosTag::Foreign
            };
            out.push(Morpheme::new(word, pos, start, start + len));
            return;
        }

        // try to peel one trailing particle, longest first
        if len >= 4 {
            let tail: String = chars[len - 2..].iter().collect();
            if PARTICLES_2.contains(&tail.as_str()) {
                let stem: String = chars[..len - 2].iter().collect();
                out.push(Morpheme::new(stem, PosTag::CommonNoun, start, start + len - 2));
                out.push(Morpheme::new(tail, PosTag::Particle, start + len - 2, start + len));
                return;
            }
        }
        if len >= 3 && PARTICLES_1.contains(&chars[len - 1]) {
            let stem: String = chars[..len - 1].iter().collect();
            out.push(Morpheme::new(stem, PosTag::CommonNoun, start, start + len - 1));
            out.push(Morpheme::new(
                chars[len - 1].to_string(),
                PosTag::Particle,
                start + len - 1,
                start + len,
            ));
            return;
        }

        out.push(Morpheme::new(word, PosTag::CommonNoun, start, start + len));
    }
}

impl MorphAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, ExtractError> {
        let mut morphemes = Vec::new();
        let mut word = String::new();
        let mut word_start = 0usize;

        for (ci, c) in text.chars().enumerate() {
            let is_word_char = hangul::is_korean(c) || c.is_alphanumeric();
            if is_word_char {
                if word.is_empty() {
                    word_start = ci;
                }
                word.push(c);
            } else if !word.is_empty() {
                let w = std::mem::take(&mut word);
                self.emit_word(&w, word_start, &mut morphemes);
            }
        }
        if !word.is_empty() {
            self.emit_word(&word, word_start, &mut morphemes);
        }
        Ok(morphemes)
    }
}
