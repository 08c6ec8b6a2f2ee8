use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::feature::FeatureId;

/// Suffix marking a trace that covers only part of an existing element.
pub const REFINEMENT_SUFFIX: &str = " Refinement";

/// The identifier of a traced code element: a dotted type name, a
/// `type method(params)` pair, or either suffixed with ` Refinement`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementTraceId(SmolStr);

impl ElementTraceId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id.as_ref()))
    }

    /// The same element, tagged as a refinement.
    pub fn refinement(&self) -> Self {
        Self(SmolStr::new(format!("{}{}", self.0, REFINEMENT_SUFFIX)))
    }

    pub fn is_refinement(&self) -> bool {
        self.0.ends_with(REFINEMENT_SUFFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementTraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Feature identifier → traced elements, in scan order. Duplicate class or
/// method traces are allowed (they mirror repeated annotations); refinement
/// traces are deduplicated per compilation unit by the collector.
pub type FeatureTraceMap = IndexMap<FeatureId, Vec<ElementTraceId>>;

/// Append `id` to the trace list of `feature`, creating the list on first use.
pub fn add_trace(map: &mut FeatureTraceMap, feature: &FeatureId, id: ElementTraceId) {
    map.entry(feature.clone()).or_default().push(id);
}

/// Merge per-file maps into one, concatenating trace lists. Per-file order is
/// preserved; the order in which files are merged follows the iterator.
pub fn merge_trace_maps<I>(maps: I) -> FeatureTraceMap
where
    I: IntoIterator<Item = FeatureTraceMap>,
{
    let mut merged = FeatureTraceMap::new();
    for map in maps {
        for (feature, traces) in map {
            merged.entry(feature).or_default().extend(traces);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refinement_tagging() {
        let id = ElementTraceId::new("jab.A doSomething()");
        assert!(!id.is_refinement());
        let refinement = id.refinement();
        assert_eq!(refinement.as_str(), "jab.A doSomething() Refinement");
        assert!(refinement.is_refinement());
    }

    #[test]
    fn merge_concatenates_in_order() {
        let a = FeatureId::new("FEATUREA");
        let mut first = FeatureTraceMap::new();
        add_trace(&mut first, &a, ElementTraceId::new("jab.A"));
        let mut second = FeatureTraceMap::new();
        add_trace(&mut second, &a, ElementTraceId::new("jab.B"));

        let merged = merge_trace_maps([first, second]);
        let traces = &merged[&a];
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].as_str(), "jab.A");
        assert_eq!(traces[1].as_str(), "jab.B");
    }
}
