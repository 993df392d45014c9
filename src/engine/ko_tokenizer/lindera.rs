//! Dictionary-backed analyzer over lindera's embedded ko-dic.
//!
//! Enabled with the `lindera-ko` feature. Tag names follow the Sejong tag
//! set ko-dic uses (`NNG`, `JKS`, ...); they are mapped to [`PosTag`] at
//! this boundary so the rest of the crate stays analyzer-agnostic.

use lindera::dictionary::{load_embedded_dictionary, DictionaryKind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

use crate::error::ExtractError;

use super::{MorphAnalyzer, Morpheme, PosTag};

pub struct LinderaAnalyzer {
    tokenizer: Tokenizer,
}

impl LinderaAnalyzer {
    /// Load the embedded ko-dic dictionary. Failure here is a
    /// configuration error: the dictionary feature was compiled in but
    /// could not be initialized.
    pub fn new() -> Result<Self, ExtractError> {
        let dictionary = load_embedded_dictionary(DictionaryKind::KoDic)
            .map_err(|e| ExtractError::AnalyzerSetup(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
        })
    }
}

fn map_tag(tag: &str) -> PosTag {
    match tag {
        t if t.starts_with("NNG") => PosTag::CommonNoun,
        t if t.starts_with("NNP") => PosTag::ProperNoun,
        t if t.starts_with("NNB") => PosTag::DependentNoun,
        t if t.starts_with("NR") => PosTag::Numeral,
        t if t.starts_with("NP") => PosTag::Pronoun,
        t if t.starts_with('J') => PosTag::Particle,
        t if t.starts_with("VV") => PosTag::Verb,
        t if t.starts_with("VA") => PosTag::Adjective,
        t if t.starts_with("MAG") || t.starts_with("MAJ") => PosTag::Adverb,
        t if t.starts_with("MM") => PosTag::Determiner,
        t if t.starts_with('E') => PosTag::Ending,
        t if t.starts_with("SL") || t.starts_with("SH") => PosTag::Foreign,
        t if t.starts_with('S') => PosTag::Punctuation,
        _ => PosTag::Unknown,
    }
}

impl MorphAnalyzer for LinderaAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, ExtractError> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| ExtractError::Analysis(e.to_string()))?;

        // lindera reports byte offsets; the adapter contract is char
        // offsets, so build a byte -> char index map once per text.
        let mut char_of_byte = vec![0usize; text.len() + 1];
        let mut chars = 0usize;
        for (b, c) in text.char_indices() {
            for off in 0..c.len_utf8() {
                char_of_byte[b + off] = chars;
            }
            chars += 1;
        }
        char_of_byte[text.len()] = chars;

        Ok(tokens
            .into_iter()
            .map(|token| {
                let pos = token
                    .details
                    .as_ref()
                    .and_then(|d| d.first())
                    .map(|tag| map_tag(tag.as_ref()))
                    .unwrap_or(PosTag::Unknown);
                Morpheme {
                    surface: token.surface.to_string(),
                    pos,
                    start: char_of_byte[token.byte_start],
                    end: char_of_byte[token.byte_end],
                }
            })
            .collect())
    }
}
