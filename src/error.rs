//! Error types for trace extraction.
//!
//! Per-block problems (malformed annotations, missing granularity, a
//! method-level block with no wrapping method) are diagnostics, not errors:
//! they are logged and the block is skipped. `ExtractError` covers the
//! failures that prevent a unit from being processed at all.

use thiserror::Error;

/// Errors that can occur while preparing a source unit or persisting traces.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The Java grammar was rejected by the tree-sitter runtime.
    #[error("incompatible Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter produced no syntax tree for the unit.
    #[error("failed to parse source unit")]
    Parse,

    /// IO error while writing trace listings.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
