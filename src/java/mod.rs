//! Java source adapter.
//!
//! Supplies the black-box "parse source into declarations with byte-offset
//! spans" capability behind the [`crate::model::SourceUnit`] model, using the
//! tree-sitter Java grammar. The extractor core never touches a syntax tree;
//! everything it needs is materialized here.

mod ids;
mod parser;

pub use ids::{method_trace_id, type_trace_id};
pub use parser::JavaUnitParser;

/// Package id used when a compilation unit declares no package.
pub const DEFAULT_PACKAGE: &str = "defaultPackage";
