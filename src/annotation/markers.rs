//! The fixed marker strings of the annotation language.

/// Every annotation comment starts with this prefix.
pub const ANNOTATION_PREFIX: &str = "//#";

/// Opens a conditional block.
pub const IF_DEFINED: &str = "//#if defined(";

/// Opens an alternative branch with its own condition. Recognized but pushed
/// like a START; ELIF semantics are not verified (no occurrence in the
/// benchmark sources).
pub const ELIF_DEFINED: &str = "//#elif defined(";

/// Opens the negated branch of the preceding condition.
pub const ELSE: &str = "//#else";

/// Closes the innermost open block.
pub const ENDIF: &str = "//#endif";

/// Prefix of granularity marker lines, e.g.
/// `//@#$LPS-LOGGING:GranularityType:Statement`.
pub const GRANULARITY_MARKER: &str = "//@#$LPS";

/// Delimiter preceding the granularity value on a marker line.
pub const GRANULARITY_DELIMITER: &str = ":GranularityType:";

/// The flat conjunction connective inside one annotation line:
/// `//#if defined(A) and defined(B)`.
pub const AND_CONNECTIVE: &str = " and ";

/// Start of a `defined(NAME)` group.
pub const DEFINED_OPEN: char = '(';

/// End of a `defined(NAME)` group.
pub const DEFINED_CLOSE: char = ')';
