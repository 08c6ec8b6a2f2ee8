//! Annotation parsing: markers, token scanning, feature expressions, and the
//! block stack.
//!
//! Annotated sources delimit conditional regions with javapp-style line
//! comments:
//!
//! ```text
//! //#if defined(COGNITIVE)
//! //@#$LPS-COGNITIVE:GranularityType:Class
//! public class Explorer { ... }
//! //#endif
//! ```
//!
//! The scanner classifies annotation comments into START/SEPARATOR/END
//! tokens, the expression resolver turns one token's `defined(...)` groups
//! into feature identifiers, and the [`BlockStack`] mirrors the nesting of
//! open blocks while computing the effective AND-combined features of the
//! innermost scope.

pub mod markers;

mod expression;
mod scanner;
mod stack;

pub use expression::resolve_features;
pub use scanner::{AnnotationToken, TokenKind, scan_annotations};
pub use stack::{BlockScope, BlockStack};
