//! Canonical feature identifiers.
//!
//! A [`FeatureId`] is the structured form of a feature or AND-combination of
//! features. Internal comparisons are structural; the `_and_`-joined string
//! form exists only at the system boundary (trace-file naming, logging).

mod ident;

pub use ident::{AND_SEPARATOR, FeatureId, NOT_PREFIX};
