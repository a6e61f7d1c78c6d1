//! Aggregate views derived from the finished page graph.
//!
//! - `sitemap`: pages grouped by folder
//! - `recent`: most recently modified pages
//! - `dump`: every page in one document
//! - `frame`: the HTML document all output is placed in
//!
//! All of them only read the graph; they run after every source is ingested.

pub mod dump;
pub mod frame;
pub mod recent;
pub mod sitemap;

use crate::{
    config::WikiConfig,
    data::PageGraph,
    page::render::{self, RenderedPage},
    utils::html::place_in_container,
};
use recent::RecentList;
use sitemap::FolderListing;

/// Title of the index page when the wiki has no `_wiki/index.md`.
pub const DEFAULT_INDEX_TITLE: &str = "Sitemap";

/// Everything the index page and the dump are built from.
#[derive(Debug, Clone)]
pub struct Projection {
    pub folders: FolderListing,
    /// Present when the recent list is enabled.
    pub recent: Option<RecentList>,
    /// Present when the full dump is enabled.
    pub dump: Option<String>,
}

/// Derive every aggregate view of `graph` the config asks for.
pub fn project(graph: &PageGraph, rendered: &[RenderedPage<'_>], config: &WikiConfig) -> Projection {
    let recent = &config.build.recent;
    Projection {
        folders: FolderListing::from_graph(graph),
        recent: recent
            .enable
            .then(|| RecentList::from_pages(graph.pages(), recent.max_length)),
        dump: config.build.dump.enable.then(|| dump::full_dump(rendered)),
    }
}

impl Projection {
    /// Content of `index.html`: heading, index page body, recent list and
    /// folder listing, in that order.
    pub fn index_content(
        &self,
        graph: &PageGraph,
        tab_size: usize,
        to_markup: impl Fn(&str) -> String,
    ) -> String {
        let index = graph.index();
        let title = index.map_or(DEFAULT_INDEX_TITLE, |page| page.title.as_str());

        let mut html = render::title_heading(title);
        if let Some((page, body)) = index.and_then(|page| Some((page, page.body.as_deref()?))) {
            html.push_str(&render::render_body(body, &page.references, tab_size, to_markup));
        }
        if let Some(recent) = &self.recent {
            html.push_str(&recent.to_html());
        }
        html.push_str(&self.folders.to_html());
        place_in_container("main", Some("main"), &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageRecord, reference};
    use crate::utils::{date::Stamp, markdown, slug::page_slug};

    fn page(title: &str, stamp: &str, body: &str) -> PageRecord {
        PageRecord {
            slug: page_slug(title, ""),
            folder: Some(String::new()),
            body: Some(body.into()),
            last_modified: Stamp::parse(stamp),
            references: reference::extract(body),
            ..PageRecord::placeholder(String::new(), title)
        }
    }

    fn graph() -> PageGraph {
        let mut graph = PageGraph::new();
        graph.ingest(page("Old", "202401010000", "{{Stub}}")).unwrap();
        graph.ingest(page("New", "202402010000", "")).unwrap();
        graph
    }

    fn config(recent: bool, dump: bool) -> WikiConfig {
        let mut config = WikiConfig::default();
        config.build.recent.enable = recent;
        config.build.dump.enable = dump;
        config
    }

    #[test]
    fn test_project_disabled_views() {
        let graph = graph();
        let projection = project(&graph, &[], &config(false, false));
        assert!(projection.recent.is_none());
        assert!(projection.dump.is_none());
        assert_eq!(projection.folders.folders().len(), 2);
    }

    #[test]
    fn test_project_recent_and_dump() {
        let graph = graph();
        let rendered = render::render_all(graph.iter(), 2, markdown::render);
        let projection = project(&graph, &rendered, &config(true, true));

        let recent: Vec<_> = projection
            .recent
            .as_ref()
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.slug.as_str())
            .collect();
        assert_eq!(recent, ["new", "old"]);

        let dump = projection.dump.unwrap();
        assert!(dump.contains(r#"<h1 id="title">Old</h1>"#));
        assert!(dump.contains(r#"<h1 id="title">New</h1>"#));
        assert!(!dump.contains(r#"<h1 id="title">Stub</h1>"#));
    }

    #[test]
    fn test_index_content_without_index_page() {
        let graph = graph();
        let projection = project(&graph, &[], &config(false, false));
        let html = projection.index_content(&graph, 2, markdown::render);

        assert!(html.starts_with(r#"<main id="main"><h1 id="title">Sitemap</h1><div><details>"#));
        assert!(!html.contains("recent-list"));
    }

    #[test]
    fn test_index_content_with_index_page() {
        let mut graph = graph();
        let mut index = page("Welcome", "202401010000", "Start at {{New}}");
        index.slug = "index".into();
        index.is_index = true;
        graph.ingest(index).unwrap();

        let projection = project(&graph, &[], &config(true, false));
        let html = projection.index_content(&graph, 2, markdown::render);

        let heading = html.find(r#"<h1 id="title">Welcome</h1>"#).unwrap();
        let body = html.find(r#"<a href="new.html">New</a></p>"#).unwrap();
        let recent = html.find("recent-list").unwrap();
        let folders = html.find("<details>").unwrap();
        assert!(heading < body && body < recent && recent < folders);
    }
}
