//! Page content rendering.
//!
//! Turns a resolved [`PageRecord`] into the inner HTML placed in the frame's
//! `{{content}}` slot:
//!
//! ```text
//! <main id="main"><article id="content">
//!   <h1 id="title">…</h1>
//!   body markup
//!   <section id="backlinks">…</section>
//!   <p class="last-modified">…</p>
//! </article></main>
//! ```

use super::{Backlink, PageRecord, reference};
use crate::utils::{
    date::Stamp,
    html::{escape_html, page_link, place_in_container},
};

/// Body shown for pages that only exist because something links to them.
pub const EMPTY_BODY: &str = "There's currently nothing here.";

/// A page's rendered content, before it is wrapped and framed.
#[derive(Debug, Clone)]
pub struct RenderedPage<'a> {
    pub page: &'a PageRecord,
    pub content: String,
}

/// Render every record of the graph, in discovery order.
pub fn render_all<'a>(
    pages: impl IntoIterator<Item = &'a PageRecord>,
    tab_size: usize,
    to_markup: impl Fn(&str) -> String,
) -> Vec<RenderedPage<'a>> {
    pages
        .into_iter()
        .map(|page| RenderedPage {
            page,
            content: render_content(page, tab_size, &to_markup),
        })
        .collect()
}

/// Render `page` with `to_markup` as the body converter: title, body,
/// backlinks and last-modified stamp, without containers.
pub fn render_content(page: &PageRecord, tab_size: usize, to_markup: impl Fn(&str) -> String) -> String {
    let body = match &page.body {
        Some(body) => render_body(body, &page.references, tab_size, to_markup),
        None => to_markup(EMPTY_BODY),
    };

    let mut content = title_heading(&page.title);
    content.push_str(&body);
    content.push_str(&backlinks_section(&page.backlinks));
    if let Some(stamp) = &page.last_modified {
        content.push_str(&last_modified(stamp));
    }
    content
}

/// Replace references with links, convert to markup, then expand tabs.
pub fn render_body(
    body: &str,
    references: &[reference::Reference],
    tab_size: usize,
    to_markup: impl Fn(&str) -> String,
) -> String {
    let linked = reference::substitute(body, references, |r| page_link(&r.slug(), &r.label));
    expand_tabs(&to_markup(&linked), tab_size)
}

pub fn title_heading(title: &str) -> String {
    format!(r#"<h1 id="title">{}</h1>"#, escape_html(title))
}

/// Wrap page content in the `main#main > article#content` containers.
pub fn wrap_page(content: &str) -> String {
    place_in_container("main", Some("main"), &place_in_container("article", Some("content"), content))
}

fn expand_tabs(markup: &str, tab_size: usize) -> String {
    markup.replace('\t', &" ".repeat(tab_size))
}

fn backlinks_section(backlinks: &[Backlink]) -> String {
    if backlinks.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section id="backlinks"><h2>Backlinks:</h2><ul>"#);
    for link in backlinks {
        html.push_str("<li>");
        html.push_str(&page_link(&link.slug, &link.title));
        html.push_str("</li>");
    }
    html.push_str("</ul></section>");
    html
}

fn last_modified(stamp: &Stamp) -> String {
    format!("\n<p class=\"last-modified\">Last modified: {stamp}</p>")
}
