use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::warn;
use tree_sitter::{Node, Parser};

use crate::error::ExtractError;
use crate::java::ids::{TOP_LEVEL_TYPE_KINDS, method_trace_id, type_trace_id};
use crate::java::DEFAULT_PACKAGE;
use crate::model::{LineComment, MethodDecl, SourceUnit, TypeDecl};

/// Parses Java sources into [`SourceUnit`]s.
///
/// One parser per thread: tree-sitter parsers are cheap to build and not
/// shareable, so parallel extraction constructs one per file.
pub struct JavaUnitParser {
    parser: Parser,
}

impl JavaUnitParser {
    pub fn new() -> Result<Self, ExtractError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_java::language())?;
        Ok(Self { parser })
    }

    /// Parse one compilation unit, materializing its line comments, method
    /// and constructor declarations, and top-level types.
    pub fn parse_unit(&mut self, source: &str) -> Result<SourceUnit, ExtractError> {
        let tree = self.parser.parse(source, None).ok_or(ExtractError::Parse)?;
        let root = tree.root_node();
        if root.has_error() {
            // tree-sitter recovers from errors; annotations interleaved
            // with declarations (e.g. inside parameter lists) can trip the
            // grammar without affecting the declarations we need.
            warn!("syntax errors in unit, continuing with recovered tree");
        }

        let package = package_name(root, source);
        let mut unit = SourceUnit::default();

        for node in root.children(&mut root.walk()) {
            if TOP_LEVEL_TYPE_KINDS.contains(&node.kind()) {
                unit.types.push(TypeDecl {
                    id: SmolStr::new(type_trace_id(node, source, &package)),
                });
            }
        }

        collect(root, source, &package, &mut unit);
        Ok(unit)
    }
}

fn package_name(root: Node, source: &str) -> String {
    let mut cursor = root.walk();
    for node in root.children(&mut cursor) {
        if node.kind() == "package_declaration" {
            let mut inner = node.walk();
            for child in node.named_children(&mut inner) {
                if matches!(child.kind(), "scoped_identifier" | "identifier") {
                    return source[child.byte_range()].to_string();
                }
            }
        }
    }
    DEFAULT_PACKAGE.to_string()
}

fn text_range(node: Node) -> TextRange {
    TextRange::new(
        TextSize::from(node.start_byte() as u32),
        TextSize::from(node.end_byte() as u32),
    )
}

/// Depth-first walk collecting comments and method-like declarations in
/// source order.
fn collect(node: Node, source: &str, package: &str, unit: &mut SourceUnit) {
    match node.kind() {
        "line_comment" => {
            unit.comments.push(LineComment {
                text: SmolStr::new(&source[node.byte_range()]),
                range: text_range(node),
            });
            return;
        }
        // older grammars expose a single comment kind
        "comment" if source[node.byte_range()].starts_with("//") => {
            unit.comments.push(LineComment {
                text: SmolStr::new(&source[node.byte_range()]),
                range: text_range(node),
            });
            return;
        }
        "method_declaration" | "constructor_declaration" => {
            unit.methods.push(MethodDecl {
                id: SmolStr::new(method_trace_id(node, source, package)),
                range: text_range(node),
            });
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, package, unit);
    }
}
