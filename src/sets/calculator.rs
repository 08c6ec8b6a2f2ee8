use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::sets::expr::{SetExpr, SetId, contains};

/// Scenario-specific auxiliary elementary set with hand-specified operands.
///
/// The ArgoUML scenario needs one synthetic set, `1_or_2_and_8`, for the two
/// glue-code feature interactions `1_and_8` and `2_and_8`; it is data about
/// that scenario, not an algorithm, so it is injected at construction rather
/// than special-cased inline.
#[derive(Debug, Clone)]
pub struct ScenarioOverride {
    /// Combined-feature ids whose query result gains the synthetic set.
    pub applies_to: Vec<SetId>,
    /// The synthetic elementary set id.
    pub synthetic: SetId,
    /// Minuend configurations of the synthetic set.
    pub minuends: Vec<SetId>,
    /// Subtrahend configurations of the synthetic set.
    pub subtrahends: Vec<SetId>,
}

impl ScenarioOverride {
    /// The override table of the ArgoUML SPL benchmark scenario (features
    /// 1 = COGNITIVE, 2 = DEPLOYMENTDIAGRAM, 8 = LOGGING in the benchmark's
    /// feature order).
    pub fn argouml() -> Vec<ScenarioOverride> {
        vec![ScenarioOverride {
            applies_to: vec![SetId::new("1_and_8"), SetId::new("2_and_8")],
            synthetic: SetId::new("1_or_2_and_8"),
            minuends: vec![SetId::new("1_or_8"), SetId::new("2_or_8")],
            subtrahends: vec![
                SetId::new("8"),
                SetId::new("1"),
                SetId::new("2"),
                SetId::new("1_or_2"),
            ],
        }]
    }
}

/// Precomputed elementary sets and their minuend/subtrahend partitions for a
/// scenario of `feature_count` boolean features.
///
/// Built once at scenario setup and immutable afterwards; every query is
/// read-only, so a calculator can be shared across concurrent feature
/// lookups. The trace set of an elementary set S is then
/// `(∩ minuend traces) − (∪ subtrahend traces)` over the returned
/// configuration lists.
#[derive(Debug)]
pub struct ElementarySetCalculator {
    feature_count: u32,
    /// Elementary set ids in construction order: per bitmask the OR id, the
    /// AND id for subsets of size ≥ 2, then the NOT ids.
    elementary_sets: Vec<SetId>,
    /// Per configuration (every subset of features, empty included): the
    /// elementary sets that configuration contains.
    memberships: IndexMap<SetId, Vec<SetId>>,
    minuends: FxHashMap<SetId, Vec<SetId>>,
    subtrahends: FxHashMap<SetId, Vec<SetId>>,
    overrides: Vec<ScenarioOverride>,
}

impl ElementarySetCalculator {
    pub fn new(feature_count: u32) -> Self {
        Self::with_overrides(feature_count, Vec::new())
    }

    pub fn with_overrides(feature_count: u32, overrides: Vec<ScenarioOverride>) -> Self {
        let mut calculator = Self {
            feature_count,
            elementary_sets: Vec::new(),
            memberships: IndexMap::new(),
            minuends: FxHashMap::default(),
            subtrahends: FxHashMap::default(),
            overrides,
        };
        let configurations = calculator.create_elementary_sets();
        calculator.create_memberships(&configurations);
        calculator.create_partitions();
        calculator.register_overrides();
        calculator
    }

    pub fn feature_count(&self) -> u32 {
        self.feature_count
    }

    /// All elementary set ids, in construction order.
    pub fn elementary_sets(&self) -> &[SetId] {
        &self.elementary_sets
    }

    /// The configurations containing `set`, i.e. the variants whose traces
    /// are intersected.
    pub fn minuends_of(&self, set: &SetId) -> Option<&[SetId]> {
        self.minuends.get(set).map(Vec::as_slice)
    }

    /// The configurations not containing `set`, i.e. the variants whose
    /// traces are subtracted.
    pub fn subtrahends_of(&self, set: &SetId) -> Option<&[SetId]> {
        self.subtrahends.get(set).map(Vec::as_slice)
    }

    /// The elementary sets to evaluate for one feature query.
    ///
    /// An AND combination is its own elementary set, plus any scenario
    /// override registered for it. A NOT is its own elementary set. A single
    /// feature expands to every configuration identifier containing it with
    /// at most one other feature — bounding the search to OR-degree ≤ 2
    /// trades completeness for tractability.
    pub fn elementary_sets_of_feature(&self, feature: &str) -> Vec<SetId> {
        match SetExpr::parse(feature) {
            Some(SetExpr::And(_)) | None => {
                let mut sets = vec![SetId::new(feature)];
                for scenario_override in &self.overrides {
                    if scenario_override
                        .applies_to
                        .iter()
                        .any(|id| id.as_str() == feature)
                    {
                        sets.push(scenario_override.synthetic.clone());
                    }
                }
                sets
            }
            Some(SetExpr::Not(_)) => vec![SetId::new(feature)],
            Some(SetExpr::Or(components)) => {
                let Some(index) = components.first().copied() else {
                    return Vec::new();
                };
                self.memberships
                    .keys()
                    .filter(|id| {
                        matches!(
                            SetExpr::parse(id.as_str()),
                            Some(SetExpr::Or(xs)) if xs.contains(&index) && xs.len() <= 2
                        )
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    /// Enumerate elementary sets and return every configuration expression
    /// (each subset of the features, the empty one included).
    fn create_elementary_sets(&mut self) -> Vec<SetExpr> {
        let mut configurations = Vec::new();
        for mask in 0u32..(1 << self.feature_count) {
            let indices: Vec<u32> = (0..self.feature_count)
                .filter(|j| mask & (1 << j) != 0)
                .map(|j| j + 1)
                .collect();
            let or_set = SetExpr::Or(indices.clone());
            if !indices.is_empty() {
                self.elementary_sets.push(or_set.id());
            }
            if indices.len() >= 2 {
                self.elementary_sets.push(SetExpr::And(indices).id());
            }
            configurations.push(or_set);
        }
        for index in 1..=self.feature_count {
            self.elementary_sets.push(SetExpr::Not(index).id());
        }
        configurations
    }

    fn create_memberships(&mut self, configurations: &[SetExpr]) {
        for configuration in configurations {
            let contained: Vec<SetId> = self
                .elementary_sets
                .iter()
                .filter(|id| {
                    SetExpr::parse(id.as_str())
                        .is_some_and(|set| contains(configuration, &set))
                })
                .cloned()
                .collect();
            self.memberships.insert(configuration.id(), contained);
        }
    }

    fn create_partitions(&mut self) {
        for set in &self.elementary_sets {
            let mut minuends = Vec::new();
            let mut subtrahends = Vec::new();
            for (configuration, contained) in &self.memberships {
                if contained.contains(set) {
                    minuends.push(configuration.clone());
                } else {
                    subtrahends.push(configuration.clone());
                }
            }
            self.minuends.insert(set.clone(), minuends);
            self.subtrahends.insert(set.clone(), subtrahends);
        }
    }

    fn register_overrides(&mut self) {
        for scenario_override in &self.overrides {
            self.minuends.insert(
                scenario_override.synthetic.clone(),
                scenario_override.minuends.clone(),
            );
            self.subtrahends.insert(
                scenario_override.synthetic.clone(),
                scenario_override.subtrahends.clone(),
            );
        }
    }
}
