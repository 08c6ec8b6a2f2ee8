use std::fmt;

use smol_str::SmolStr;

/// Separator of OR identifiers, e.g. `1_or_2`.
pub const OR_SEPARATOR: &str = "_or_";

/// Separator of AND identifiers, e.g. `1_and_2`.
pub const AND_SEPARATOR: &str = "_and_";

/// Prefix of NOT identifiers, e.g. `not_1`.
pub const NOT_PREFIX: &str = "not_";

/// Boundary identifier of an elementary set or configuration.
///
/// Plain structured sets render through [`SetExpr`]; compound scenario
/// overrides like `1_or_2_and_8` exist only as opaque ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(SmolStr);

impl SetId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A structured set expression over 1-based feature indices.
///
/// Component lists are sorted ascending, so structural equality doubles as
/// set equality. `Or` with one component is a single feature; `Or` with no
/// components is the empty configuration. `And` always has at least two
/// components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetExpr {
    Or(Vec<u32>),
    And(Vec<u32>),
    Not(u32),
}

impl SetExpr {
    pub fn single(index: u32) -> Self {
        Self::Or(vec![index])
    }

    /// Parse a plain identifier. Compound ids mixing `_or_` and `_and_`
    /// (scenario overrides) have no structured form and return `None`.
    pub fn parse(id: &str) -> Option<Self> {
        if id.is_empty() {
            return Some(Self::Or(Vec::new()));
        }
        if let Some(rest) = id.strip_prefix(NOT_PREFIX) {
            return rest.parse().ok().map(Self::Not);
        }
        let has_or = id.contains(OR_SEPARATOR);
        let has_and = id.contains(AND_SEPARATOR);
        match (has_or, has_and) {
            (true, true) => None,
            (_, true) => parse_components(id, AND_SEPARATOR).map(Self::And),
            _ => parse_components(id, OR_SEPARATOR).map(Self::Or),
        }
    }

    /// The canonical identifier of this expression.
    pub fn id(&self) -> SetId {
        SetId::new(self.to_string())
    }

    fn components(&self) -> &[u32] {
        match self {
            Self::Or(xs) | Self::And(xs) => xs,
            Self::Not(i) => std::slice::from_ref(i),
        }
    }
}

fn parse_components(id: &str, separator: &str) -> Option<Vec<u32>> {
    let mut components: Vec<u32> = id
        .split(separator)
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;
    components.sort_unstable();
    components.dedup();
    Some(components)
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (components, separator) = match self {
            Self::Or(xs) => (xs.as_slice(), OR_SEPARATOR),
            Self::And(xs) => (xs.as_slice(), AND_SEPARATOR),
            Self::Not(i) => return write!(f, "{NOT_PREFIX}{i}"),
        };
        for (i, component) in components.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// The containment relation between a configuration-like expression `a` and
/// an elementary set `b`.
///
/// Read as: a variant enabling exactly the features of `a` satisfies `b`.
/// A singleton (or the empty configuration) contains only an equal singleton
/// or an OR listing it, never an AND. An OR contains a member singleton, an
/// AND whose components it covers, or an intersecting OR. An AND contains a
/// member singleton, a set-equal OR, or another AND — identical when not
/// larger, sharing any component when strictly larger. NOT on the right is
/// containment of the negated feature, inverted.
pub fn contains(a: &SetExpr, b: &SetExpr) -> bool {
    use SetExpr::{And, Not, Or};

    if let Not(i) = b {
        return !contains(a, &SetExpr::single(*i));
    }

    match a {
        Or(xs) if xs.len() <= 1 => match b {
            Or(ys) if ys.len() <= 1 => xs == ys,
            And(_) => false,
            Or(ys) => xs.first().is_some_and(|x| ys.contains(x)),
            Not(_) => unreachable!(),
        },
        Or(xs) => match b {
            Or(ys) if ys.len() <= 1 => ys.first().is_some_and(|y| xs.contains(y)),
            And(ys) => ys.iter().all(|y| xs.contains(y)),
            Or(ys) => xs.iter().any(|x| ys.contains(x)),
            Not(_) => unreachable!(),
        },
        And(xs) => match b {
            Or(ys) if ys.len() <= 1 => ys.first().is_some_and(|y| xs.contains(y)),
            And(ys) if xs.len() > ys.len() => ys.iter().any(|y| xs.contains(y)),
            And(ys) => xs == ys,
            Or(ys) => xs == ys,
            Not(_) => unreachable!(),
        },
        Not(i) => b.components() == [*i],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", SetExpr::Or(vec![]))]
    #[case("3", SetExpr::single(3))]
    #[case("1_or_2", SetExpr::Or(vec![1, 2]))]
    #[case("2_and_1", SetExpr::And(vec![1, 2]))]
    #[case("not_4", SetExpr::Not(4))]
    fn parses_plain_identifiers(#[case] id: &str, #[case] expected: SetExpr) {
        assert_eq!(SetExpr::parse(id), Some(expected));
    }

    #[test]
    fn compound_identifiers_are_opaque() {
        assert_eq!(SetExpr::parse("1_or_2_and_8"), None);
    }

    #[test]
    fn rendering_round_trips() {
        for id in ["", "3", "1_or_2", "1_and_2_and_3", "not_4"] {
            assert_eq!(SetExpr::parse(id).unwrap().id().as_str(), id);
        }
    }

    #[rstest]
    // singleton left-hand side
    #[case("1", "1", true)]
    #[case("1", "2", false)]
    #[case("1", "1_or_2", true)]
    #[case("1", "1_and_2", false)]
    // OR left-hand side
    #[case("1_or_2", "1", true)]
    #[case("1_or_2", "3", false)]
    #[case("1_or_2", "1_and_2", true)]
    #[case("1_or_2_or_3", "1_and_2", true)]
    #[case("1_or_2", "1_and_3", false)]
    #[case("1_or_2", "2_or_3", true)]
    #[case("1_or_2", "3_or_4", false)]
    // AND left-hand side
    #[case("1_and_2", "1", true)]
    #[case("1_and_2", "3", false)]
    #[case("1_and_2_and_3", "1_and_2", true)]
    #[case("1_and_2", "1_and_2", true)]
    #[case("1_and_2", "1_and_3", false)]
    #[case("1_and_2", "1_or_2", true)]
    #[case("1_and_2", "1_or_3", false)]
    // NOT right-hand side
    #[case("1_or_2", "not_3", true)]
    #[case("1_or_2", "not_1", false)]
    #[case("", "not_1", true)]
    // empty configuration
    #[case("", "", true)]
    #[case("", "1", false)]
    #[case("", "1_or_2", false)]
    fn containment_table(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        let a = SetExpr::parse(a).unwrap();
        let b = SetExpr::parse(b).unwrap();
        assert_eq!(contains(&a, &b), expected);
    }

    #[test]
    fn multi_digit_indices_do_not_false_positive() {
        // "10_or_2" must not be treated as containing feature 1
        let config = SetExpr::parse("10_or_2").unwrap();
        assert!(!contains(&config, &SetExpr::single(1)));
        assert!(contains(&config, &SetExpr::single(10)));
    }
}
