//! Declaration matcher.
//!
//! Matching is textual. The anchor `<name>: <Type>[] = [` is searched for
//! literally, then brackets are counted from the anchor's opening `[` until
//! the list closes; the closing `]` must be followed directly by `;`.
//!
//! While counting, the contents of `'...'`, `"..."` and `` `...` `` literals
//! and of `//` and `/* */` comments are skipped, so brackets inside them do
//! not shift the depth. Regex literals and `${...}` substitutions that contain
//! backticks are not tokenized and can still desynchronize the count.

use seedstrip_types::DeclarationSignature;
use seedstrip_types::signature::is_identifier_char;
use std::ops::Range;

/// Replacement text for a matched span.
pub const EMPTY_LIST: &str = "[];";

/// Byte range of a matched element list, from the opening `[` through the
/// terminating `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    /// True when the list is already `[];`.
    pub fn is_empty_list(&self, text: &str) -> bool {
        self.as_str(text) == EMPTY_LIST
    }
}

/// Locate the element list of `sig` in `text`.
///
/// Only the first anchor occurrence that starts on an identifier boundary is
/// considered. Returns `None` when that anchor is absent, when its brackets
/// never balance, or when the closing bracket is not followed by `;`.
pub fn find_span(text: &str, sig: &DeclarationSignature) -> Option<Span> {
    let anchor = sig.anchor();
    let at = find_anchor(text, &anchor)?;
    let open = at + anchor.len() - 1;

    let bytes = text.as_bytes();
    let close = matching_bracket(bytes, open)?;
    if bytes.get(close + 1) != Some(&b';') {
        return None;
    }

    Some(Span {
        start: open,
        end: close + 2,
    })
}

/// Replace the element list of `sig` with an empty list.
///
/// Returns `None` when the declaration is not found. A declaration that is
/// already empty yields `Some` text identical to the input.
pub fn strip_declaration(text: &str, sig: &DeclarationSignature) -> Option<String> {
    let span = find_span(text, sig)?;
    let mut out = text.to_string();
    out.replace_range(span.range(), EMPTY_LIST);
    Some(out)
}

fn find_anchor(text: &str, anchor: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(anchor) {
        let at = from + offset;
        let on_boundary = text[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !is_identifier_char(c));
        if on_boundary {
            return Some(at);
        }
        from = at + anchor.len();
    }
    None
}

/// Index of the `]` closing the `[` at `open`.
fn matching_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'\'' | b'"') => i = skip_quoted(bytes, i, quote, false),
            b'`' => i = skip_quoted(bytes, i, b'`', true),
            b'/' => match bytes.get(i + 1) {
                Some(b'/') => i = skip_line_comment(bytes, i),
                Some(b'*') => i = skip_block_comment(bytes, i),
                _ => {}
            },
            _ => {}
        }
        i += 1;
    }
    None
}

// The skip helpers return the index of the last byte they consumed, or
// `bytes.len()` when the construct runs off the end of the text.

fn skip_quoted(bytes: &[u8], start: usize, quote: u8, multiline: bool) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'\n' if !multiline => return i,
            c if c == quote => return i,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |p| start + p)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    let body = start + 2;
    bytes[body..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |p| body + p + 1)
}
