//! Wiki building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_wiki()
//!     │
//!     ├── scan()            ──► ordered source entries
//!     │
//!     ├── load_graph()      ──► pages → PageGraph::ingest, media → output
//!     │       │
//!     │       └── _wiki/index.md (if any) ingested last as the index page
//!     │
//!     ├── render_all()      ──► <slug>.html for every record
//!     │
//!     ├── project()         ──► index.html, full.html
//!     │
//!     └── copy_stylesheets()
//! ```

use crate::{
    assets::{self, MediaCopier},
    config::WikiConfig,
    data::PageGraph,
    error::BuildError,
    generator::{self, DEFAULT_INDEX_TITLE, dump, frame::Frame},
    log,
    page::{
        self,
        loader::INDEX_SLUG,
        render::{self, RenderedPage},
    },
    scan::{self, SourceEntry, SourceKind, WIKI_DIR},
    utils::{markdown, minify::minify},
    vlog,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

const INDEX_SOURCE: &str = "index.md";

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub stubs: usize,
    pub media: usize,
    pub stylesheets: usize,
}

/// Build the whole wiki from `config.build.input` into `config.build.output`.
pub fn build_wiki(config: &WikiConfig) -> Result<BuildSummary> {
    let input = &config.build.input;
    let output = &config.build.output;
    let wiki_dir = config.wiki_dir();

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    if config.build.clean {
        assets::delete_current_html(output)?;
    }

    let entries = scan::scan(input)?;
    log!("build"; "found {} source files", entries.len());

    let (graph, media) = load_graph(input, &entries, output)?;
    if graph.is_empty() {
        log!("warn"; "no pages found in {}", input.display());
    }
    let pages = graph.pages().count();
    vlog!(1, "graph"; "{} pages, {} stubs", pages, graph.len() - pages);

    let frame = Frame::load(&wiki_dir)?;
    let tab_size = config.build.tab_size;

    let rendered = render::render_all(graph.iter(), tab_size, markdown::render);
    for RenderedPage { page, content } in &rendered {
        let html = frame.fill(&page.title, &page.description, &render::wrap_page(content));
        write_html(&output.join(format!("{}.html", page.slug)), &html, config)?;
    }

    let projection = generator::project(&graph, &rendered, config);
    let index = graph.index();
    let index_html = frame.fill(
        index.map_or(DEFAULT_INDEX_TITLE, |page| page.title.as_str()),
        index.map_or("", |page| page.description.as_str()),
        &projection.index_content(&graph, tab_size, markdown::render),
    );
    write_html(&output.join(format!("{INDEX_SLUG}.html")), &index_html, config)?;

    if let Some(content) = &projection.dump {
        let html = frame.fill(dump::DUMP_TITLE, "", content);
        write_html(&output.join(format!("{}.html", dump::DUMP_SLUG)), &html, config)?;
        log!("build"; "{}.html", dump::DUMP_SLUG);
    }

    let stylesheets = assets::copy_stylesheets(&wiki_dir, output)?;

    Ok(BuildSummary {
        pages,
        stubs: graph.len() - pages,
        media: media.len(),
        stylesheets,
    })
}

/// Ingest every page in scan order and copy media along the way; the index
/// page comes last.
fn load_graph(root: &Path, entries: &[SourceEntry], output: &Path) -> Result<(PageGraph, MediaCopier)> {
    let mut graph = PageGraph::new();
    let mut media = MediaCopier::new();

    for entry in entries {
        match entry.kind {
            SourceKind::Page => {
                vlog!(1, "page"; "{}", entry.relative());
                let page = page::load(root, &entry.folder, &entry.file_name, false)
                    .map_err(BuildError::from)?;
                graph.ingest(page)?;
            }
            SourceKind::Media => media.copy(root, entry, output)?,
        }
    }

    if root.join(WIKI_DIR).join(INDEX_SOURCE).is_file() {
        vlog!(1, "page"; "{}/{}", WIKI_DIR, INDEX_SOURCE);
        let index = page::load(root, WIKI_DIR, INDEX_SOURCE, true).map_err(BuildError::from)?;
        graph.ingest(index)?;
    }

    Ok((graph, media))
}

fn write_html(path: &Path, html: &str, config: &WikiConfig) -> Result<()> {
    fs::write(path, &*minify(html, config))
        .with_context(|| format!("Failed to write {}", path.display()))
}
