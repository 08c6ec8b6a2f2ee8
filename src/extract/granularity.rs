use tracing::warn;

use crate::annotation::markers;
use crate::base::split_lines;

/// The declared scope of an annotation block.
///
/// `Undefined` covers both a missing marker and every finer-grained value the
/// benchmark uses (`Statement`, `Field`, `Import`, ...): anything that is not
/// a whole package, class, or method is attributed as a refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Package,
    Class,
    Method,
    InterfaceMethod,
    Undefined,
}

impl Granularity {
    fn from_marker_value(value: &str) -> Self {
        match value {
            "Package" => Self::Package,
            "Class" => Self::Class,
            "Method" => Self::Method,
            "InterfaceMethod" => Self::InterfaceMethod,
            _ => Self::Undefined,
        }
    }

    /// Whether the block decorates every top-level type of the unit.
    pub fn is_type_level(self) -> bool {
        matches!(self, Self::Package | Self::Class)
    }

    /// Whether the block decorates the methods it wraps.
    pub fn is_method_level(self) -> bool {
        matches!(self, Self::Method | Self::InterfaceMethod)
    }
}

/// Find the granularity declared for a block.
///
/// `block_text` spans from the opening token through the closing marker line.
/// The granularity marker normally sits on the second line, but not always;
/// the scan stops once a second if/elif/else marker line is reached so a
/// nested child block's marker (which describes the child) is never picked
/// up. A block with no marker resolves to `Undefined`; that is reported
/// unless the block is an `//#else` branch, which never carries its own
/// marker.
pub fn resolve_granularity(block_text: &str) -> Granularity {
    let mut markers_seen = 0;
    for line in split_lines(block_text) {
        if line.contains(markers::IF_DEFINED)
            || line.contains(markers::ELIF_DEFINED)
            || line.contains(markers::ELSE)
        {
            markers_seen += 1;
            // the first one is the block's own opener
            if markers_seen >= 2 {
                break;
            }
        }
        if line.contains(markers::GRANULARITY_MARKER) {
            if let Some(at) = line.find(markers::GRANULARITY_DELIMITER) {
                let value = &line[at + markers::GRANULARITY_DELIMITER.len()..];
                return Granularity::from_marker_value(value);
            }
        }
    }
    if !block_text.starts_with(markers::ELSE) {
        warn!(block = block_text, "granularity annotation not found");
    }
    Granularity::Undefined
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Package", Granularity::Package)]
    #[case("Class", Granularity::Class)]
    #[case("Method", Granularity::Method)]
    #[case("InterfaceMethod", Granularity::InterfaceMethod)]
    #[case("Statement", Granularity::Undefined)]
    #[case("Field", Granularity::Undefined)]
    fn resolves_marker_values(#[case] value: &str, #[case] expected: Granularity) {
        let block = format!(
            "//#if defined(FEATUREA)\n//@#$LPS-FEATUREA:GranularityType:{value}\nint i = 0;\n//#endif"
        );
        assert_eq!(resolve_granularity(&block), expected);
    }

    #[test]
    fn marker_may_come_after_other_annotation_lines() {
        let block = "\
//#if defined(LOGGING)
//@#$LPS-LOGGING:Localization:NestedIfdef-COGNITIVE
//@#$LPS-LOGGING:GranularityType:Import
import org.apache.log4j.Logger;
//#endif";
        assert_eq!(resolve_granularity(block), Granularity::Undefined);

        let block = "\
//#if defined(LOGGING)
//@#$LPS-LOGGING:GranularityType:Method
public void log() {
}
//#endif";
        assert_eq!(resolve_granularity(block), Granularity::Method);
    }

    #[test]
    fn nested_marker_is_not_picked_up() {
        // the outer block has no marker of its own; the nested block's
        // marker must not leak out
        let block = "\
//#if defined(FEATUREA)
public void doSomething() {
    //#if defined(FEATUREB)
    //@#$LPS-FEATUREB:GranularityType:Statement
    int i = 0;
    //#endif
}
//#endif";
        assert_eq!(resolve_granularity(block), Granularity::Undefined);
    }

    #[test]
    fn else_blocks_have_no_marker() {
        let block = "//#else\nint i = 1;\n//#endif";
        assert_eq!(resolve_granularity(block), Granularity::Undefined);
    }
}
