use std::fmt;

use smol_str::SmolStr;

/// Separator joining the components of an AND-combination in the boundary
/// string form, e.g. `COGNITIVE_and_LOGGING`.
pub const AND_SEPARATOR: &str = "_and_";

/// Prefix marking the negation of a feature in the boundary string form.
pub const NOT_PREFIX: &str = "not_";

/// A feature or AND-combination of features, canonical by construction:
/// components are sorted alphabetically and deduplicated, so two derivations
/// that reduce to the same set of names compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId {
    components: Vec<SmolStr>,
}

impl FeatureId {
    /// A single feature. The name is taken verbatim; if it contains the AND
    /// separator it is split into components, so parsing and construction
    /// agree.
    pub fn new(name: &str) -> Self {
        Self::and(name.split(AND_SEPARATOR))
    }

    /// An AND-combination. Sorts and deduplicates, so the result is canonical
    /// regardless of the order or multiplicity of `names`.
    pub fn and<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut components: Vec<SmolStr> = names
            .into_iter()
            .map(|n| SmolStr::new(n.as_ref()))
            .collect();
        components.sort();
        components.dedup();
        Self { components }
    }

    /// The sorted, deduplicated component names.
    pub fn components(&self) -> &[SmolStr] {
        &self.components
    }

    /// Whether this is a single feature rather than an AND-combination.
    pub fn is_single(&self) -> bool {
        self.components.len() == 1
    }

    /// AND-combine two identifiers through the joined string form. For plain
    /// components this is the union; an opaque negation component like
    /// `not_X_and_Y` re-splits on the separator, so the combination renders
    /// as `...X_and_Y_and_not_X` exactly as the trace files name it.
    pub fn combine(&self, other: &FeatureId) -> FeatureId {
        FeatureId::new(&format!("{self}{AND_SEPARATOR}{other}"))
    }

    /// Whether every component of `self` appears in `other`, i.e. `other`
    /// already carries this combination as part of a larger AND. `A` is
    /// subsumed by `A_and_B`; `A_and_C` is not subsumed by `A_and_B`.
    pub fn is_subsumed_by(&self, other: &FeatureId) -> bool {
        self.components
            .iter()
            .all(|c| other.components.contains(c))
    }

    /// The negation used for `//#else` branches: the whole identifier is
    /// prefixed with `not_` and becomes a single opaque component, so a
    /// top-level else renders as `not_FEATUREA_and_FEATUREB`. Combining it
    /// with an enclosing scope re-splits it (see [`FeatureId::combine`]).
    /// This is deliberately narrow; it is not a general boolean negation.
    pub fn negated(&self) -> FeatureId {
        FeatureId {
            components: vec![SmolStr::new(format!("{}{}", NOT_PREFIX, self))],
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(AND_SEPARATOR)?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalization_sorts_and_dedups() {
        let id = FeatureId::new("FEATUREB_and_FEATUREA_and_FEATUREA");
        assert_eq!(id.to_string(), "FEATUREA_and_FEATUREB");
        assert_eq!(id, FeatureId::and(["FEATUREA", "FEATUREB"]));
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let id = FeatureId::new("FEATUREA_and_FEATUREB_and_FEATUREA");
        assert_eq!(FeatureId::new(&id.to_string()), id);
    }

    #[test]
    fn subsumption() {
        let a = FeatureId::new("FEATUREA");
        let ab = FeatureId::new("FEATUREA_and_FEATUREB");
        let ac = FeatureId::new("FEATUREA_and_FEATUREC");
        assert!(a.is_subsumed_by(&ab));
        assert!(!ac.is_subsumed_by(&ab));
        assert!(ab.is_subsumed_by(&ab));
    }

    #[test]
    fn combine_is_a_component_union() {
        let ab = FeatureId::new("FEATUREA_and_FEATUREB");
        let a = FeatureId::new("FEATUREA");
        assert_eq!(ab.combine(&a), ab);
        let c = FeatureId::new("FEATUREC");
        assert_eq!(
            ab.combine(&c).to_string(),
            "FEATUREA_and_FEATUREB_and_FEATUREC"
        );
    }

    #[test]
    fn combining_a_negated_combination_resplits_its_components() {
        let a = FeatureId::new("FEATUREA");
        let negated = FeatureId::new("FEATUREA_and_FEATUREB").negated();
        assert_eq!(negated.to_string(), "not_FEATUREA_and_FEATUREB");
        assert_eq!(
            a.combine(&negated).to_string(),
            "FEATUREA_and_FEATUREB_and_not_FEATUREA"
        );
    }

    #[test]
    fn negation_is_an_opaque_component() {
        let a = FeatureId::new("FEATUREA");
        assert_eq!(a.negated().to_string(), "not_FEATUREA");
        assert!(a.negated().is_single());
    }
}
