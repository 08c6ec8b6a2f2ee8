use crate::annotation::markers;
use crate::feature::FeatureId;

/// Extract every parenthesized group from `text`, left to right.
fn parenthesized_groups(text: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(markers::DEFINED_OPEN) {
        let after = &rest[open + 1..];
        let Some(close) = after.find(markers::DEFINED_CLOSE) else {
            break;
        };
        if close > 0 {
            groups.push(&after[..close]);
        }
        rest = &after[close + 1..];
    }
    groups
}

/// Resolve the feature names of one START/ELIF token.
///
/// Each `defined(NAME)` group yields one feature, in textual order. When the
/// line carries the literal ` and ` connective the names collapse into a
/// single canonical AND-combination — glue-code features like
/// `//#if defined(COGNITIVE) and defined(DEPLOYMENTDIAGRAM)` become one
/// `COGNITIVE_and_DEPLOYMENTDIAGRAM` feature. Only this flat conjunction is
/// supported; OR is expressed by multiple names (` or `) or separate
/// branches.
pub fn resolve_features(text: &str) -> Vec<FeatureId> {
    let names = parenthesized_groups(text);
    if names.is_empty() {
        return Vec::new();
    }
    if text.contains(markers::AND_CONNECTIVE) {
        vec![FeatureId::and(names)]
    } else {
        names.into_iter().map(FeatureId::new).collect()
    }
}
