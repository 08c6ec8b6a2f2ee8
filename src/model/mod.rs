//! Language-neutral source model.
//!
//! The extractor never parses a host language itself: an adapter (see
//! [`crate::java`]) supplies each file as a [`SourceUnit`] of line comments
//! and declarations with byte-offset spans. Traces produced from a unit are
//! collected into a [`FeatureTraceMap`].

mod trace;
mod unit;

pub use trace::{ElementTraceId, FeatureTraceMap, REFINEMENT_SUFFIX, add_trace, merge_trace_maps};
pub use unit::{LineComment, MethodDecl, SourceUnit, TypeDecl};
