//! The page graph: every slug of a build, its record and its backlinks.
//!
//! Pages are ingested one at a time in scan order. A reference to a page not
//! seen yet creates a placeholder record under the referenced slug; when the
//! real page turns up later it takes the placeholder's place, keeping both the
//! backlinks gathered so far and the placeholder's position in iteration order.

use crate::{
    error::BuildError,
    page::PageRecord,
    utils::slug::page_slug,
    vlog,
};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct PageGraph {
    /// Records in discovery order (placeholder creation counts).
    pages: Vec<PageRecord>,
    /// Slug → position in `pages`.
    slots: FxHashMap<String, usize>,
    /// The site index page, kept apart from the regular pages.
    index: Option<PageRecord>,
}

impl PageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one discovered page to the graph.
    ///
    /// A real page already owning `page.slug` is a fatal collision; nothing is
    /// changed in that case.
    pub fn ingest(&mut self, page: PageRecord) -> Result<(), BuildError> {
        if page.is_index {
            return self.ingest_index(page);
        }

        if let Some(existing) = self.get(&page.slug).filter(|p| !p.is_placeholder()) {
            return Err(BuildError::SlugCollision {
                slug: page.slug.clone(),
                existing: existing.location(),
                incoming: page.location(),
            });
        }

        for reference in &page.references {
            let target = self.resolve_placeholder(&reference.label, reference.target_text());
            if target.add_backlink(&page.title, &page.slug) {
                vlog!(2, "graph"; "backlink {} <- {}", target.slug, page.slug);
            }
        }

        match self.slots.get(&page.slug) {
            Some(&slot) => {
                vlog!(2, "graph"; "promote {}", page.slug);
                self.pages[slot].promote(page);
            }
            None => {
                vlog!(2, "graph"; "page {}", page.slug);
                self.push(page);
            }
        }
        Ok(())
    }

    /// The index page's links resolve like any page's, but it is not a page
    /// others should list as a backlink.
    fn ingest_index(&mut self, page: PageRecord) -> Result<(), BuildError> {
        if let Some(existing) = &self.index {
            return Err(BuildError::DuplicateIndex {
                existing: existing.location(),
                incoming: page.location(),
            });
        }
        for reference in &page.references {
            self.resolve_placeholder(&reference.label, reference.target_text());
        }
        self.index = Some(page);
        Ok(())
    }

    /// Record owning the slug of `target_text`, created as a placeholder titled
    /// `label` if the slug is new.
    pub fn resolve_placeholder(&mut self, label: &str, target_text: &str) -> &mut PageRecord {
        let slug = page_slug(target_text, "");
        let slot = match self.slots.get(&slug) {
            Some(&slot) => slot,
            None => {
                vlog!(2, "graph"; "placeholder {}", slug);
                self.push(PageRecord::placeholder(slug, label))
            }
        };
        &mut self.pages[slot]
    }

    fn push(&mut self, page: PageRecord) -> usize {
        let slot = self.pages.len();
        self.slots.insert(page.slug.clone(), slot);
        self.pages.push(page);
        slot
    }

    pub fn get(&self, slug: &str) -> Option<&PageRecord> {
        self.slots.get(slug).map(|&slot| &self.pages[slot])
    }

    /// All records, placeholders included, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter()
    }

    /// Records backed by a source file, in discovery order.
    pub fn pages(&self) -> impl Iterator<Item = &PageRecord> {
        self.iter().filter(|page| !page.is_placeholder())
    }

    pub fn index(&self) -> Option<&PageRecord> {
        self.index.as_ref()
    }

    /// Number of records, placeholders included; the index is not counted.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
