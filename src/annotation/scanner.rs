use smol_str::SmolStr;
use text_size::TextRange;

use crate::annotation::markers;
use crate::model::LineComment;

/// The role a token plays in the block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `//#if defined(...)` — opens a block.
    Start,
    /// `//#elif defined(...)` or `//#else` — closes the current branch and
    /// opens the next one.
    Separator,
    /// `//#endif` — closes the innermost block.
    End,
}

/// One classified annotation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationToken {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub range: TextRange,
}

impl AnnotationToken {
    /// Whether processing this token closes the innermost open scope.
    pub fn closes(&self) -> bool {
        matches!(self.kind, TokenKind::End | TokenKind::Separator)
    }

    /// Whether processing this token opens a new scope.
    pub fn opens(&self) -> bool {
        matches!(self.kind, TokenKind::Start | TokenKind::Separator)
    }

    /// Whether this is a bare `//#else` separator (no condition of its own).
    pub fn is_else(&self) -> bool {
        self.kind == TokenKind::Separator && !self.text.starts_with(markers::ELIF_DEFINED)
    }
}

/// Classify one comment text, or `None` for ordinary comments and
/// unrecognized (possibly truncated) annotation comments.
fn classify(text: &str) -> Option<TokenKind> {
    if text.starts_with(markers::IF_DEFINED) {
        Some(TokenKind::Start)
    } else if text.starts_with(markers::ELIF_DEFINED) || text.starts_with(markers::ELSE) {
        Some(TokenKind::Separator)
    } else if text.starts_with(markers::ENDIF) {
        Some(TokenKind::End)
    } else {
        None
    }
}

/// Scan the line comments of a unit for annotation tokens, in source order.
///
/// Pure over the comment list; malformed annotation comments are not an
/// error, they are simply not tokens.
pub fn scan_annotations(comments: &[LineComment]) -> Vec<AnnotationToken> {
    comments
        .iter()
        .filter(|c| c.text.starts_with(markers::ANNOTATION_PREFIX))
        .filter_map(|c| {
            classify(&c.text).map(|kind| AnnotationToken {
                kind,
                text: c.text.clone(),
                range: c.range,
            })
        })
        .collect()
}
