//! Elementary-set algebra over boolean feature configurations.
//!
//! The graph-based location technique needs, for every feature or feature
//! combination, the configurations whose trace sets must be intersected
//! (minuends) and subtracted (subtrahends) to isolate exactly the code owned
//! by it. [`ElementarySetCalculator`] precomputes that partition once per
//! scenario from the feature count alone; [`FeatureCatalog`] translates
//! between feature names and the 1-based index identifiers the calculator
//! speaks.

mod calculator;
mod catalog;
mod expr;

pub use calculator::{ElementarySetCalculator, ScenarioOverride};
pub use catalog::FeatureCatalog;
pub use expr::{AND_SEPARATOR, NOT_PREFIX, OR_SEPARATOR, SetExpr, SetId, contains};
