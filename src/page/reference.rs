//! Inline cross-reference markers.
//!
//! A reference is written `{{label}}` or `{{label|target}}`. Handling is split
//! in two passes:
//!
//! 1. [`extract`] tokenizes the body into [`Reference`]s with their byte spans.
//! 2. [`substitute`] rebuilds the body, replacing each span.
//!
//! Substitution runs on the raw body before markup conversion, so generated
//! anchors are never scanned for markers.
//!
//! # Lexical rules
//!
//! - the first `}}` after an opening `{{` closes the marker (non-greedy)
//! - markers do not nest and never span a line break
//! - `\{{` is not a marker; the markdown renderer later drops the backslash
//! - an even run of backslashes escapes itself, so `\\{{x}}` is a marker
//! - only the first `|` separates label from target; both are trimmed
//! - a marker with an empty label is left as plain text

use crate::utils::slug::page_slug;
use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const PIPE: char = '|';
const ESCAPE: u8 = b'\\';

/// One `{{...}}` marker found in a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Text shown for the link.
    pub label: String,
    /// Explicit target after `|`, if any.
    pub target: Option<String>,
    /// Byte range of the whole marker, braces included.
    pub span: Range<usize>,
}

impl Reference {
    /// Text the target slug is derived from.
    pub fn target_text(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.label)
    }

    /// Slug of the referenced page.
    ///
    /// Target text with nothing usable in it (`{{???}}`) links to
    /// [`UNTITLED`](crate::utils::slug::UNTITLED).
    pub fn slug(&self) -> String {
        page_slug(self.target_text(), "")
    }
}

/// Scan `body` for reference markers, in order of appearance.
pub fn extract(body: &str) -> Vec<Reference> {
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = body[cursor..].find(OPEN) {
        let start = cursor + offset;
        let inner_start = start + OPEN.len();

        if is_escaped(body, start) {
            cursor = inner_start;
            continue;
        }
        let Some(inner_len) = body[inner_start..].find(CLOSE) else {
            break;
        };

        let inner = &body[inner_start..inner_start + inner_len];
        let end = inner_start + inner_len + CLOSE.len();

        match parse_inner(inner) {
            Some((label, target)) if !inner.contains('\n') => {
                references.push(Reference {
                    label,
                    target,
                    span: start..end,
                });
                cursor = end;
            }
            // Not a marker: let a later `{{` inside this stretch start one.
            _ => cursor = start + 1,
        }
    }

    references
}

/// Whether the byte at `pos` follows an odd number of backslashes.
fn is_escaped(body: &str, pos: usize) -> bool {
    let run = body.as_bytes()[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE)
        .count();
    run % 2 == 1
}

/// Split marker contents into label and optional target.
fn parse_inner(inner: &str) -> Option<(String, Option<String>)> {
    let (label, target) = match inner.split_once(PIPE) {
        Some((label, target)) => (label.trim(), Some(target.trim())),
        None => (inner.trim(), None),
    };
    if label.is_empty() {
        return None;
    }
    let target = target.filter(|t| !t.is_empty()).map(str::to_owned);
    Some((label.to_owned(), target))
}

/// Rebuild `body` with every reference span replaced by `replace(reference)`.
///
/// `references` must come from [`extract`] on the same `body`.
pub fn substitute(
    body: &str,
    references: &[Reference],
    mut replace: impl FnMut(&Reference) -> String,
) -> String {
    let mut out = String::with_capacity(body.len() + references.len() * 16);
    let mut last = 0;
    for reference in references {
        out.push_str(&body[last..reference.span.start]);
        out.push_str(&replace(reference));
        last = reference.span.end;
    }
    out.push_str(&body[last..]);
    out
}
