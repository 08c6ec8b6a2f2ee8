//! Trace-id construction from Java syntax nodes.
//!
//! Ids follow the benchmark's challenge format: dotted qualified type names
//! (`org.argouml.ui.Explorer`, nested classes dot-chained) and
//! `qualifiedType name(ParamType,ParamType)` for methods and constructors.

use tree_sitter::Node;
use tracing::warn;

/// Type declaration kinds that can own methods in the challenge format.
const NAMED_TYPE_KINDS: &[&str] = &["class_declaration", "interface_declaration"];

/// Every kind a compilation unit lists as a top-level type.
pub(crate) const TOP_LEVEL_TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
];

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

fn declared_name(node: Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| node_text(name, source).to_string())
}

/// The dotted qualified id of a type declaration: the package, the names of
/// enclosing class/interface declarations, and the type's own name.
pub fn type_trace_id(node: Node, source: &str, package: &str) -> String {
    let mut names = vec![declared_name(node, source).unwrap_or_default()];
    let mut current = node;
    while let Some(parent) = current.parent() {
        if NAMED_TYPE_KINDS.contains(&parent.kind()) {
            if let Some(name) = declared_name(parent, source) {
                names.push(name);
            }
        }
        current = parent;
    }
    names.push(package.to_string());
    names.reverse();
    names.join(".")
}

/// The trace id of a method or constructor declaration:
/// `qualifiedType name(ParamType,ParamType)`.
///
/// A declaration whose owner is not a class or interface (enum constant
/// bodies, anonymous classes) has no id in the challenge format; it is
/// logged and the empty string is returned so the caller can skip it.
pub fn method_trace_id(node: Node, source: &str, package: &str) -> String {
    let Some(owner) = named_owner(node) else {
        warn!(
            method = %declared_name(node, source).unwrap_or_default(),
            "method owner is not a named type declaration"
        );
        return String::new();
    };

    let mut id = type_trace_id(owner, source, package);
    id.push(' ');
    id.push_str(&declared_name(node, source).unwrap_or_default());
    id.push('(');
    if let Some(parameters) = node.child_by_field_name("parameters") {
        let mut first = true;
        let mut cursor = parameters.walk();
        for parameter in parameters.named_children(&mut cursor) {
            let parameter_type = match parameter.kind() {
                "formal_parameter" => parameter.child_by_field_name("type"),
                "spread_parameter" => parameter.named_child(0),
                _ => None,
            };
            if let Some(parameter_type) = parameter_type {
                if !first {
                    id.push(',');
                }
                id.push_str(node_text(parameter_type, source));
                first = false;
            }
        }
    }
    id.push(')');
    id
}

/// The nearest enclosing class or interface declaration, or `None` when a
/// different construct (enum body, anonymous class) intervenes.
fn named_owner(node: Node) -> Option<Node> {
    let mut current = node;
    while let Some(parent) = current.parent() {
        if NAMED_TYPE_KINDS.contains(&parent.kind()) {
            return Some(parent);
        }
        if matches!(
            parent.kind(),
            "enum_declaration" | "annotation_type_declaration" | "object_creation_expression"
        ) {
            return None;
        }
        current = parent;
    }
    None
}
