//! Markdown body rendering.
//!
//! Converts page bodies to HTML with `pulldown-cmark` (CommonMark plus the GFM
//! extensions). Links leaving the wiki open in a new tab.

use crate::utils::html::escape_html;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render markdown text to HTML.
pub fn render(text: &str) -> String {
    let parser = Parser::new_ext(text, options()).map(|event| match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) if is_external(&dest_url) => Event::InlineHtml(external_anchor(&dest_url, &title)),
        event => event,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Opening tag for an external link; the closing `</a>` comes from the
/// unchanged `End(Link)` event.
fn external_anchor(url: &str, title: &str) -> CowStr<'static> {
    let title = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    format!(r#"<a href="{}"{title} target="_blank">"#, escape_html(url)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        assert_eq!(render("Some *text*"), "<p>Some <em>text</em></p>\n");
    }

    #[test]
    fn test_render_external_link_opens_new_tab() {
        assert_eq!(
            render("[site](https://example.com)"),
            "<p><a href=\"https://example.com\" target=\"_blank\">site</a></p>\n"
        );
    }

    #[test]
    fn test_render_external_link_with_title() {
        let html = render(r#"[site](https://example.com "Example")"#);
        assert!(html.contains(r#"title="Example" target="_blank""#));
    }

    #[test]
    fn test_render_local_link_untouched() {
        let html = render("[page](page.html)");
        assert_eq!(html, "<p><a href=\"page.html\">page</a></p>\n");
    }

    #[test]
    fn test_render_passes_inline_anchor_through() {
        let html = render(r#"See <a href="example-file.html">Example File</a> now"#);
        assert_eq!(
            html,
            "<p>See <a href=\"example-file.html\">Example File</a> now</p>\n"
        );
    }

    #[test]
    fn test_render_gfm_strikethrough() {
        assert!(render("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_render_escaped_braces() {
        assert_eq!(render(r"\{{literal}}"), "<p>{{literal}}</p>\n");
    }
}
