//! Every page on a single document (`full.html`).

use crate::{page::render::RenderedPage, utils::html::place_in_container};

/// Output name of the dump, without extension.
pub const DUMP_SLUG: &str = "full";

pub const DUMP_TITLE: &str = "Full Dump";

/// Concatenate the content of every real, non-index page in the given order.
pub fn full_dump(rendered: &[RenderedPage<'_>]) -> String {
    let articles: String = rendered
        .iter()
        .filter(|r| !r.page.is_placeholder() && !r.page.is_index)
        .map(|r| place_in_container("article", None, &r.content))
        .collect();
    place_in_container("main", Some("main"), &articles)
}
