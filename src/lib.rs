//! # vartrace
//!
//! Ground-truth variability trace extraction from feature-annotated sources,
//! and the elementary-set algebra used to rediscover those traces from built
//! variants.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → granularity resolution, per-file collection, export
//!   ↓
//! annotation → token scanning, feature expressions, the block stack
//!   ↓
//! feature   → canonical feature identifiers (AND-combinations)
//!   ↓
//! model     → SourceUnit, trace ids, FeatureTraceMap
//!   ↓
//! base      → byte-offset spans, line utilities
//!
//! java      → tree-sitter adapter producing SourceUnits (edge of the core)
//! sets      → ElementarySetCalculator, FeatureCatalog (independent)
//! ```

/// Foundation: byte-offset spans, line splitting and counting
pub mod base;

/// Language-neutral source model and trace map
pub mod model;

/// Canonical feature identifiers
pub mod feature;

/// Annotation markers, scanner, expressions, and the block stack
pub mod annotation;

/// Trace extraction and ground-truth export
pub mod extract;

/// Elementary-set algebra over feature configurations
pub mod sets;

/// Java source adapter (tree-sitter)
pub mod java;

/// Error types
pub mod error;

// Re-export the types most callers need
pub use annotation::{AnnotationToken, BlockStack, TokenKind};
pub use error::ExtractError;
pub use extract::{Granularity, collect_traces, extract_ground_truth, write_trace_files};
pub use feature::FeatureId;
pub use java::JavaUnitParser;
pub use model::{ElementTraceId, FeatureTraceMap, SourceUnit};
pub use sets::{ElementarySetCalculator, FeatureCatalog, ScenarioOverride, SetExpr, SetId};
