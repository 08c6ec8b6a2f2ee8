use text_size::TextSize;

use crate::feature::FeatureId;

/// One open annotation scope: the condition that guards it and the byte
/// offset of its opening token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScope {
    pub condition: Vec<FeatureId>,
    pub start: TextSize,
}

/// The stack of open annotation scopes.
///
/// Depth always equals the current annotation nesting depth; the top of the
/// stack is the innermost, most specific scope. Nested conditions exist
/// because a class-level `//#if defined(A)` can wrap a method-level
/// `//#if defined(B)` (see e.g. ActionAddClassifierRole in the benchmark).
#[derive(Debug, Default)]
pub struct BlockStack {
    scopes: Vec<BlockScope>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost open scope.
    pub fn top(&self) -> Option<&BlockScope> {
        self.scopes.last()
    }

    pub fn push(&mut self, condition: Vec<FeatureId>, start: TextSize) {
        self.scopes.push(BlockScope { condition, start });
    }

    pub fn pop(&mut self) -> Option<BlockScope> {
        self.scopes.pop()
    }

    /// The effective feature combinations of the innermost scope, folding in
    /// every enclosing scope by AND-combination.
    ///
    /// With no nesting the top condition is returned unchanged. Otherwise the
    /// top condition is cross-combined with each enclosing scope, outermost
    /// first, skipping scopes that already wholly contain the top condition.
    /// Within a cross product, a pair whose combination is equal to or
    /// subsumed by the enclosing feature contributes nothing — so a nested
    /// `//#if defined(A)` under `//#if defined(A) and defined(B)` yields no
    /// combination of its own, while `//#if defined(B)` nested under
    /// `//#if defined(A)` yields `A_and_B`.
    pub fn effective_features(&self) -> Vec<FeatureId> {
        let Some(top) = self.scopes.last() else {
            return Vec::new();
        };
        if self.scopes.len() == 1 {
            return top.condition.clone();
        }

        let peek = &top.condition;
        let mut combined = peek.clone();
        for scope in &self.scopes[..self.scopes.len() - 1] {
            let enclosing = &scope.condition;
            if peek.iter().all(|f| enclosing.contains(f)) {
                continue;
            }
            let mut next = Vec::new();
            for f in &combined {
                for enclosing_feature in enclosing {
                    if f == enclosing_feature || f.is_subsumed_by(enclosing_feature) {
                        // already covered by the enclosing scope
                        continue;
                    }
                    next.push(f.combine(enclosing_feature));
                }
            }
            combined = next;
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(stack: &mut BlockStack, features: &[&str], start: u32) {
        stack.push(
            features.iter().map(|f| FeatureId::new(f)).collect(),
            TextSize::from(start),
        );
    }

    fn effective(stack: &BlockStack) -> Vec<String> {
        stack
            .effective_features()
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    #[test]
    fn empty_stack_has_no_features() {
        let stack = BlockStack::new();
        assert!(stack.effective_features().is_empty());
    }

    #[test]
    fn single_scope_is_returned_unchanged() {
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA", "FEATUREB"], 0);
        assert_eq!(effective(&stack), vec!["FEATUREA", "FEATUREB"]);
    }

    #[test]
    fn nesting_produces_and_combinations() {
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA"], 0);
        push(&mut stack, &["FEATUREB"], 10);
        assert_eq!(effective(&stack), vec!["FEATUREA_and_FEATUREB"]);
    }

    #[test]
    fn three_levels_fold_outermost_first() {
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA"], 0);
        push(&mut stack, &["FEATUREC"], 10);
        push(&mut stack, &["FEATURED"], 20);
        assert_eq!(
            effective(&stack),
            vec!["FEATUREA_and_FEATUREC_and_FEATURED"]
        );
    }

    #[test]
    fn or_scope_distributes_over_nested_feature() {
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA", "FEATUREB"], 0);
        push(&mut stack, &["FEATUREC"], 10);
        assert_eq!(
            effective(&stack),
            vec!["FEATUREA_and_FEATUREC", "FEATUREB_and_FEATUREC"]
        );
    }

    #[test]
    fn enclosing_scope_containing_the_top_is_skipped() {
        // (A or B) wrapping A: the inner block belongs to A alone
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA", "FEATUREB"], 0);
        push(&mut stack, &["FEATUREA"], 10);
        assert_eq!(effective(&stack), vec!["FEATUREA"]);
    }

    #[test]
    fn subsumed_combination_disappears() {
        // A_and_B wrapping A: the inner block adds nothing beyond the outer
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA_and_FEATUREB"], 0);
        push(&mut stack, &["FEATUREA"], 10);
        assert!(effective(&stack).is_empty());
    }

    #[test]
    fn nested_else_scope_folds_into_component_form() {
        // if(A) { if(B) ... else ... }: the else scope carries the negation
        // of A_and_B, and folding it with the enclosing A re-splits the
        // negated combination into sorted components
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA"], 0);
        push(&mut stack, &["FEATUREB"], 10);
        let negated: Vec<FeatureId> = stack
            .effective_features()
            .iter()
            .map(FeatureId::negated)
            .collect();
        stack.pop();
        stack.push(negated, 20.into());
        assert_eq!(
            effective(&stack),
            vec!["FEATUREA_and_FEATUREB_and_not_FEATUREA"]
        );
    }

    #[test]
    fn nested_and_combination_folds_into_triple() {
        let mut stack = BlockStack::new();
        push(&mut stack, &["FEATUREA_and_FEATUREB"], 0);
        push(&mut stack, &["FEATUREC"], 10);
        assert_eq!(
            effective(&stack),
            vec!["FEATUREA_and_FEATUREB_and_FEATUREC"]
        );
    }
}
