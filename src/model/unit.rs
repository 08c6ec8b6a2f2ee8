use smol_str::SmolStr;
use text_size::TextRange;

/// A line comment with its byte range in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComment {
    pub text: SmolStr,
    pub range: TextRange,
}

/// A method-like declaration (method or constructor) with its byte range and
/// precomputed trace id, e.g. `jab.Outer.Inner doSomething(String,int)`.
///
/// An empty id means the adapter could not attribute the declaration to a
/// named type (already logged there); the collector skips such declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub id: SmolStr,
    pub range: TextRange,
}

impl MethodDecl {
    /// Whether the declaration is strictly wrapped by `range`: the block
    /// starts before the method and ends after it.
    pub fn wrapped_by(&self, range: TextRange) -> bool {
        range.start() < self.range.start() && range.end() > self.range.end()
    }

    /// Whether `range` lies fully inside the declaration.
    pub fn contains(&self, range: TextRange) -> bool {
        range.start() >= self.range.start() && range.end() <= self.range.end()
    }
}

/// A top-level type declaration with its precomputed dotted trace id,
/// e.g. `org.argouml.ui.ProjectBrowser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub id: SmolStr,
}

/// One parsed compilation unit: everything the extractor needs to know about
/// a file, in source order.
#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    /// Every line comment of the file, in source order.
    pub comments: Vec<LineComment>,
    /// Every method and constructor declaration, in source order.
    pub methods: Vec<MethodDecl>,
    /// The top-level type declarations (there can be more than one in
    /// unusual files).
    pub types: Vec<TypeDecl>,
}
