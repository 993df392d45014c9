use thiserror::Error;

/// Errors surfaced by the extraction core.
///
/// Arithmetic edge cases are never errors: the score calculator returns a
/// defined zero for degenerate counts. What remains is configuration-level
/// failure around the pluggable morphological analyzer. No variant is
/// retried inside the core.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The morphological analyzer could not be constructed (missing or
    /// broken dictionary, bad configuration).
    #[error("analyzer setup failed: {0}")]
    AnalyzerSetup(String),

    /// The morphological analyzer failed on an input text.
    #[error("morphological analysis failed: {0}")]
    Analysis(String),
}
