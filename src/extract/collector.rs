use rustc_hash::FxHashSet;
use text_size::TextRange;
use tracing::{debug, error, warn};

use crate::annotation::{BlockStack, resolve_features, scan_annotations};
use crate::base::{LineCountMode, count_source_lines};
use crate::extract::granularity::resolve_granularity;
use crate::feature::FeatureId;
use crate::model::{ElementTraceId, FeatureTraceMap, SourceUnit, add_trace};

/// Collect the feature traces of one compilation unit.
///
/// Walks the annotation tokens in source order, maintaining the block stack.
/// A closing token emits traces for the block that is about to be popped; an
/// opening token pushes the new scope. A `//#else` does both: it closes the
/// branch and pushes the negation of the features that were effective for it.
///
/// Problems local to one block (a stray `//#endif`, a method-level block with
/// no wrapping method) are logged and skipped; they never abort the rest of
/// the file.
pub fn collect_traces(unit: &SourceUnit, source: &str) -> FeatureTraceMap {
    let mut stack = BlockStack::new();
    let mut map = FeatureTraceMap::new();
    // refinement (feature, id) pairs already recorded for this unit
    let mut seen_refinements: FxHashSet<(FeatureId, ElementTraceId)> = FxHashSet::default();

    let tokens = scan_annotations(&unit.comments);
    if !tokens.is_empty() {
        let core_lines = count_source_lines(source, LineCountMode::Core);
        if core_lines > 0 {
            debug!(loc = core_lines, "core lines");
        }
    }

    for token in &tokens {
        // Captured before the pop: a closing token reports the features of
        // the scope it closes, and an ELSE negates these same features.
        let current = stack.effective_features();

        if token.closes() {
            match stack.top() {
                Some(top) => {
                    let block = TextRange::new(top.start, token.range.end());
                    emit_block(
                        unit,
                        source,
                        block,
                        &current,
                        &mut map,
                        &mut seen_refinements,
                    );
                    stack.pop();
                }
                None => {
                    warn!(text = token.text.as_str(), "closing token without an open block");
                    continue;
                }
            }
        }

        if token.opens() {
            let condition = if token.is_else() {
                // Negation of the branch just closed. Deliberately narrow:
                // each feature gets a not_ prefix, nothing more.
                current.iter().map(FeatureId::negated).collect()
            } else {
                resolve_features(&token.text)
            };
            stack.push(condition, token.range.start());
        }
    }

    if !stack.is_empty() {
        warn!(open_blocks = stack.depth(), "unbalanced annotation blocks at end of unit");
    }

    map
}

/// Emit the traces of one closed block.
fn emit_block(
    unit: &SourceUnit,
    source: &str,
    block: TextRange,
    features: &[FeatureId],
    map: &mut FeatureTraceMap,
    seen_refinements: &mut FxHashSet<(FeatureId, ElementTraceId)>,
) {
    let block_text = &source[block];
    let granularity = resolve_granularity(block_text);

    for feature in features {
        debug!(
            feature = %feature,
            loc = count_source_lines(block_text, LineCountMode::Block),
            ?granularity,
            "block closed"
        );

        if granularity.is_type_level() {
            for ty in &unit.types {
                add_trace(map, feature, ElementTraceId::new(&ty.id));
            }
        } else if granularity.is_method_level() {
            let wrapping: Vec<_> = unit
                .methods
                .iter()
                .filter(|m| !m.id.is_empty() && m.wrapped_by(block))
                .collect();
            if wrapping.is_empty() {
                error!(
                    feature = %feature,
                    "method-granularity block wraps no method declaration"
                );
            }
            for method in wrapping {
                add_trace(map, feature, ElementTraceId::new(&method.id));
            }
        } else {
            // Undefined or finer-grained: a refinement of the containing
            // method, or failing that, of every top-level type.
            let containing = unit
                .methods
                .iter()
                .find(|m| !m.id.is_empty() && m.contains(block));
            match containing {
                Some(method) => {
                    let id = ElementTraceId::new(&method.id).refinement();
                    if seen_refinements.insert((feature.clone(), id.clone())) {
                        add_trace(map, feature, id);
                    }
                }
                None => {
                    for ty in &unit.types {
                        let id = ElementTraceId::new(&ty.id).refinement();
                        if seen_refinements.insert((feature.clone(), id.clone())) {
                            add_trace(map, feature, id);
                        }
                    }
                }
            }
        }
    }
}
