//! Line-oriented text utilities for annotated source.
//!
//! The line counter feeds the LoC diagnostics reported during extraction. It
//! never influences which traces are emitted.

use crate::annotation::markers;

/// What a call to [`count_source_lines`] is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCountMode {
    /// Count the core lines of a whole compilation unit: everything outside
    /// annotation blocks.
    Core,
    /// Count the lines of one annotation block. The leading `//#if` line is
    /// skipped so the block's own opener does not open a "nested" region.
    Block,
}

/// Split text on `\r\n`, `\r`, or `\n`.
///
/// `str::lines` does not treat a lone `\r` as a terminator, which the
/// annotated sources occasionally contain.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Count non-blank, non-annotation source lines in `text`.
///
/// Lines between a nested `//#if defined(` and its matching `//#endif` are
/// excluded: they belong to the inner block, not to the region being counted.
pub fn count_source_lines(text: &str, mode: LineCountMode) -> usize {
    let mut counter = 0;
    let mut nesting: i32 = 0;
    for (i, raw) in split_lines(text).iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // A block's own opener must not count as a nested region.
        if mode == LineCountMode::Block && i == 0 && line.starts_with(markers::IF_DEFINED) {
            continue;
        }
        if line.starts_with(markers::IF_DEFINED) {
            nesting += 1;
        }
        if line.starts_with(markers::ENDIF) {
            nesting -= 1;
        }
        if !line.starts_with(markers::ANNOTATION_PREFIX)
            && !line.starts_with(markers::GRANULARITY_MARKER)
            && nesting == 0
        {
            counter += 1;
        }
    }
    counter
}
