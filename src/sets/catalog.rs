use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::feature::{AND_SEPARATOR, NOT_PREFIX};
use crate::sets::expr::{OR_SEPARATOR, SetId};

/// Translation between feature names and the 1-based index identifiers the
/// [`crate::sets::ElementarySetCalculator`] speaks.
///
/// Indices follow declaration order: the first feature is `1`. Combined
/// names translate component-wise and sort ascending, so
/// `LOGGING_and_COGNITIVE` and `COGNITIVE_and_LOGGING` produce the same id.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    names: Vec<SmolStr>,
    indices: FxHashMap<SmolStr, u32>,
}

impl FeatureCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<SmolStr> = names.into_iter().map(|n| SmolStr::new(n.as_ref())).collect();
        let indices = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32 + 1))
            .collect();
        Self { names, indices }
    }

    pub fn feature_count(&self) -> u32 {
        self.names.len() as u32
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(SmolStr::as_str)
    }

    /// The 1-based index of a single feature name.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    /// The index identifier of a single, AND-combined, or negated feature
    /// name; `None` if any component is unknown.
    pub fn id_of_feature(&self, name: &str) -> Option<SetId> {
        if let Some(rest) = name.strip_prefix(NOT_PREFIX) {
            return self
                .id_of_feature(rest)
                .map(|id| SetId::new(format!("{NOT_PREFIX}{id}")));
        }
        if name.contains(AND_SEPARATOR) {
            let mut indices = name
                .split(AND_SEPARATOR)
                .map(|part| self.index_of(part))
                .collect::<Option<Vec<u32>>>()?;
            indices.sort_unstable();
            indices.dedup();
            return Some(SetId::new(join(&indices, AND_SEPARATOR)));
        }
        self.index_of(name).map(|i| SetId::new(i.to_string()))
    }

    /// The configuration identifier of an enabled-feature set: the sorted
    /// indices OR-joined, or the empty id for no features.
    pub fn id_of_configuration<I, S>(&self, enabled: I) -> Option<SetId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut indices = enabled
            .into_iter()
            .map(|name| self.index_of(name.as_ref()))
            .collect::<Option<Vec<u32>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Some(SetId::new(join(&indices, OR_SEPARATOR)))
    }
}

fn join(indices: &[u32], separator: &str) -> String {
    indices
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
