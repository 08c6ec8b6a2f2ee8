//! Foundation types for the vartrace toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`TextRange`], [`TextSize`] - source positions as byte offsets
//! - Line splitting and annotation-aware line counting
//!
//! This module has NO dependencies on other vartrace modules.

pub mod text;

pub use text::{LineCountMode, count_source_lines, split_lines};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
