//! Small HTML string helpers shared by the page renderer and generators.

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap `content` in `<element id="...">`.
pub fn place_in_container(element: &str, id: Option<&str>, content: &str) -> String {
    match id {
        Some(id) => format!(r#"<{element} id="{id}">{content}</{element}>"#),
        None => format!("<{element}>{content}</{element}>"),
    }
}

/// Link to a generated page.
pub fn page_link(slug: &str, text: &str) -> String {
    format!(r#"<a href="{slug}.html">{}</a>"#, escape_html(text))
}
