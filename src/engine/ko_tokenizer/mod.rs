//! Tokenizer adapter over a pluggable Korean morphological analyzer.
//!
//! The extraction core never talks to a morphological analyzer directly;
//! it consumes [`NounSequence`]s produced here. The adapter keeps only
//! noun-bearing morphemes, post-filters analyzer debris, and groups the
//! survivors into runs that are contiguous in the source text (tolerating
//! the gap left by a dropped particle).

pub mod rule_based;

#[cfg(feature = "lindera-ko")]
pub mod lindera;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::utils::hangul;

/// Max char gap between two tokens that still counts as "adjacent".
/// Wide enough for one grammatical particle and a space.
pub const MAX_GAP: usize = 3;

/// Tokens shorter than this are discarded.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Residue of imperfectly-cleaned HTML in the source corpus. Any token
/// exactly equal to one of these entity names is dropped.
const HTML_ENTITIES: &[&str] = &[
    "nbsp", "amp", "quot", "apos", "lt", "gt", "middot", "hellip", "rarr",
    "larr", "uarr", "darr", "ldquo", "rdquo", "lsquo", "rsquo", "times",
    "bull", "laquo", "raquo",
];

/// Part-of-speech category of a morpheme, reduced to what the extraction
/// pipeline cares about. Analyzer-specific tag sets (e.g. Sejong `NNG`,
/// `JKS`, ...) are mapped into this enum at the adapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosTag {
    /// Common noun (NNG)
    CommonNoun,
    /// Proper noun (NNP)
    ProperNoun,
    /// Dependent/bound noun (NNB)
    DependentNoun,
    /// Numeral (NR)
    Numeral,
    /// Pronoun (NP)
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Particle,
    Ending,
    Punctuation,
    /// Foreign-script token (SL/SH)
    Foreign,
    Unknown,
}

impl PosTag {
    /// Nominal categories survive the adapter; everything else is dropped.
    #[inline]
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            PosTag::CommonNoun
                | PosTag::ProperNoun
                | PosTag::DependentNoun
                | PosTag::Numeral
                | PosTag::Pronoun
        )
    }
}

/// A single analyzer-emitted morpheme. Offsets are char offsets into the
/// analyzed text, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub pos: PosTag,
    pub start: usize,
    pub end: usize,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, pos: PosTag, start: usize, end: usize) -> Self {
        Self {
            surface: surface.into(),
            pos,
            start,
            end,
        }
    }
}

/// The contract the extraction core requires from a morphological
/// analyzer: POS-tagged morphemes with char offsets, in offset order.
///
/// An implementation failure is a configuration/input error and aborts
/// analysis of that document; there is no retry at this layer.
pub trait MorphAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, ExtractError>;
}

/// A noun-bearing token retained by the adapter. `term` is the raw
/// surface form; offsets are char offsets into the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub term: String,
    pub start: usize,
    pub end: usize,
}

/// An ordered run of tokens adjacent in the source text.
///
/// Invariant: `tokens.len() >= 2`. Shorter runs are discarded during
/// grouping and never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounSequence {
    tokens: Vec<Token>,
}

impl NounSequence {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The literal substring of `text` spanning tokens `i..=j`.
    ///
    /// This recovers natural surface forms the tokenization distorted,
    /// e.g. a particle sitting between two nouns. Offsets are char
    /// offsets, so the span is resolved through `char_indices`.
    pub fn phrase(&self, text: &str, i: usize, j: usize) -> String {
        let start = self.tokens[i].start;
        let end = self.tokens[j].end;
        text.chars().skip(start).take(end.saturating_sub(start)).collect()
    }
}

/// Wraps a [`MorphAnalyzer`] and exposes only noun sequences.
#[derive(Debug, Clone)]
pub struct NounTokenizer<A> {
    analyzer: A,
    max_gap: usize,
}

impl<A: MorphAnalyzer> NounTokenizer<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            max_gap: MAX_GAP,
        }
    }

    /// Override the adjacency gap. Mostly for tests.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Run the analyzer and group its nominal output into sequences.
    ///
    /// Blank input yields an empty list, not an error. An analyzer
    /// failure is surfaced to the caller untouched.
    pub fn tokenize(&self, text: &str) -> Result<Vec<NounSequence>, ExtractError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let morphemes = self.analyzer.analyze(text)?;

        let mut tokens: Vec<Token> = morphemes
            .into_iter()
            .filter(|m| m.pos.is_nominal())
            .filter(|m| m.surface.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|m| hangul::contains_korean(&m.surface))
            .filter(|m| !HTML_ENTITIES.contains(&m.surface.to_ascii_lowercase().as_str()))
            .map(|m| Token {
                term: m.surface,
                start: m.start,
                end: m.end,
            })
            .collect();
        tokens.sort_by_key(|t| t.start);

        Ok(self.group(tokens))
    }

    fn group(&self, tokens: Vec<Token>) -> Vec<NounSequence> {
        let mut sequences = Vec::new();
        let mut current: Vec<Token> = Vec::new();
        for token in tokens {
            let adjacent = current
                .last()
                .map(|prev| token.start.saturating_sub(prev.end) <= self.max_gap)
                .unwrap_or(true);
            if !adjacent {
                Self::flush(&mut sequences, std::mem::take(&mut current));
            }
            current.push(token);
        }
        Self::flush(&mut sequences, current);
        sequences
    }

    fn flush(sequences: &mut Vec<NounSequence>, run: Vec<Token>) {
        if run.len() >= 2 {
            sequences.push(NounSequence { tokens: run });
        }
    }
}
