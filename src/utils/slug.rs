//! Page slug normalization.
//!
//! Converts page titles (or fallback file names) to the canonical identifier a
//! page is written and linked under.
//!
//! # Rules
//!
//! | Step       | Example                          |
//! |------------|----------------------------------|
//! | lowercase  | `Bob Fossil` → `bob fossil`      |
//! | whitespace | `bob  fossil` → `bob-fossil`     |
//! | forbidden  | `bob (fossil)` → `bob-fossil`    |
//! | truncate   | cut at the last `-` within limit |
//! | reserved   | `index` → `index_`               |

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 64;

/// Slugs the build writes itself (`index.html`, `full.html`).
pub const RESERVED: &[&str] = &["index", "full"];

/// Appended to a slug that would shadow a reserved output name.
pub const RESERVED_SUFFIX: char = '_';

/// Slug used when neither title nor file name yields anything.
pub const UNTITLED: &str = "untitled";

/// Word separator inside slugs.
const SEPARATOR: char = '-';

/// Characters forbidden in a bare file name component
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '/', '(', ')', '[', ']', '{', '}', '"', '%',
];

// ============================================================================
// Normalization
// ============================================================================

/// Normalize display text to a slug.
///
/// Deterministic and infallible. May return an empty string when the text has
/// nothing usable in it; use [`page_slug`] when a non-empty slug is required.
pub fn normalize(text: &str) -> String {
    let slug = truncate_at_separator(sanitize(text), MAX_SLUG_LEN);
    if RESERVED.contains(&slug.as_str()) {
        format!("{slug}{RESERVED_SUFFIX}")
    } else {
        slug
    }
}

/// Slug for a discovered page: title first, then file stem, then [`UNTITLED`].
pub fn page_slug(title: &str, file_stem: &str) -> String {
    [title, file_stem]
        .into_iter()
        .map(normalize)
        .find(|slug| !slug.is_empty())
        .unwrap_or_else(|| UNTITLED.to_owned())
}

/// Lowercase, collapse whitespace runs into one separator, drop forbidden chars.
fn sanitize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() || c == SEPARATOR {
            if !slug.is_empty() && !slug.ends_with(SEPARATOR) {
                slug.push(SEPARATOR);
            }
        } else if !c.is_control() && !FORBIDDEN_CHARS.contains(&c) {
            slug.extend(c.to_lowercase());
        }
    }
    while slug.ends_with(SEPARATOR) {
        slug.pop();
    }
    slug
}

/// Cut `slug` to at most `max` characters without splitting a word,
/// unless the first word alone is longer than `max`.
fn truncate_at_separator(slug: String, max: usize) -> String {
    let Some((cut, _)) = slug.char_indices().nth(max) else {
        return slug;
    };

    let (head, rest) = slug.split_at(cut);
    if rest.starts_with(SEPARATOR) {
        return head.to_owned();
    }
    match head.rfind(SEPARATOR) {
        Some(pos) if pos > 0 => head[..pos].to_owned(),
        _ => head.to_owned(),
    }
}
