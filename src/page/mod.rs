//! Page records and per-page processing.
//!
//! - **reference**: `{{...}}` marker extraction and substitution
//! - **frontmatter**: metadata block parsing
//! - **loader**: source file → [`PageRecord`]
//! - **render**: [`PageRecord`] → page content
//!
//! # Record Kinds
//!
//! | Kind        | folder   | body     | last_modified | Created by            |
//! |-------------|----------|----------|---------------|-----------------------|
//! | real        | `Some`   | `Some`   | `Some`        | loading a source file |
//! | placeholder | `None`   | `None`   | `None`        | an inbound reference  |

pub mod frontmatter;
pub mod loader;
pub mod reference;
pub mod render;

pub use loader::{LoadError, load};
pub use reference::Reference;

use crate::{error::PageLocation, utils::date::Stamp};

/// A page that links to this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlink {
    pub title: String,
    pub slug: String,
}

/// One node of the page graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Canonical identifier; output is written to `{slug}.html`.
    pub slug: String,
    /// Source folder relative to the input root (`""` for the root itself).
    pub folder: Option<String>,
    pub title: String,
    pub description: String,
    /// Raw, unrendered body.
    pub body: Option<String>,
    pub last_modified: Option<Stamp>,
    /// References found in `body`, in order of appearance.
    pub references: Vec<Reference>,
    /// Pages referencing this one, unique by slug, in discovery order.
    pub backlinks: Vec<Backlink>,
    pub is_index: bool,
}

impl PageRecord {
    /// A page that exists only because something links to it.
    pub fn placeholder(slug: String, title: &str) -> Self {
        Self {
            slug,
            folder: None,
            title: title.to_owned(),
            description: String::new(),
            body: None,
            last_modified: None,
            references: Vec::new(),
            backlinks: Vec::new(),
            is_index: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.folder.is_none()
    }

    /// Record a backlink unless one from `slug` is already present.
    ///
    /// Returns whether the backlink was added.
    pub fn add_backlink(&mut self, title: &str, slug: &str) -> bool {
        if self.backlinks.iter().any(|link| link.slug == slug) {
            return false;
        }
        self.backlinks.push(Backlink {
            title: title.to_owned(),
            slug: slug.to_owned(),
        });
        true
    }

    /// Replace this placeholder's fields with a discovered page,
    /// keeping the backlinks accumulated so far first.
    pub fn promote(&mut self, page: PageRecord) {
        let placeholder = std::mem::replace(self, page);
        let discovered = std::mem::replace(&mut self.backlinks, placeholder.backlinks);
        for link in discovered {
            self.add_backlink(&link.title, &link.slug);
        }
    }

    pub fn location(&self) -> PageLocation {
        PageLocation {
            title: self.title.clone(),
            folder: self.folder.clone(),
        }
    }
}
