//! Folder listing for the index page.
//!
//! Groups every page by the folder its source file lives in. Placeholders have
//! no folder and are gathered in a separate stubs bucket.
//!
//! # Output Format
//!
//! ```html
//! <div><details><summary>notes/<wbr/>daily</summary><ul>
//!   <li><a href="monday.html">Monday</a> - first day</li>
//!   <li><a href="tuesday.html">Tuesday</a></li>
//! </ul></details></div>
//! ```

use crate::{
    data::PageGraph,
    page::PageRecord,
    utils::html::{escape_html, page_link, place_in_container},
};
use rustc_hash::FxHashMap;

// ============================================================================
// Constants
// ============================================================================

/// Display name of the input root folder.
const ROOT_FOLDER_NAME: &str = "[root]";

/// Display name of the placeholder bucket.
const STUBS_FOLDER_NAME: &str = "Wiki Stubs";

// ============================================================================
// Folder Listing
// ============================================================================

/// Where a page is listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Folder {
    /// Source folder relative to the input root.
    Path(String),
    /// Pages that were linked to but never written.
    Stubs,
}

impl Folder {
    pub fn of(page: &PageRecord) -> Self {
        match &page.folder {
            Some(folder) => Self::Path(folder.clone()),
            None => Self::Stubs,
        }
    }

    /// Sort key: the folder path itself, so the root (`""`) comes first.
    fn sort_key(&self) -> String {
        match self {
            Self::Path(path) => path.to_lowercase(),
            Self::Stubs => STUBS_FOLDER_NAME.to_lowercase(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Path(path) if path.is_empty() => ROOT_FOLDER_NAME,
            Self::Path(path) => path,
            Self::Stubs => STUBS_FOLDER_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPage {
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Pages grouped by folder, both sorted case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct FolderListing {
    folders: Vec<(Folder, Vec<ListedPage>)>,
}

impl FolderListing {
    /// Build the listing from every non-index record of the graph.
    pub fn from_graph(graph: &PageGraph) -> Self {
        let mut folders: Vec<(Folder, Vec<ListedPage>)> = Vec::new();
        let mut slots: FxHashMap<Folder, usize> = FxHashMap::default();

        for page in graph.iter().filter(|page| !page.is_index) {
            let folder = Folder::of(page);
            let slot = *slots.entry(folder.clone()).or_insert_with(|| {
                folders.push((folder, Vec::new()));
                folders.len() - 1
            });
            folders[slot].1.push(ListedPage {
                title: page.title.clone(),
                slug: page.slug.clone(),
                description: page.description.clone(),
            });
        }

        // Stable sorts: equal keys keep discovery order.
        folders.sort_by_cached_key(|(folder, _)| folder.sort_key());
        for (_, pages) in &mut folders {
            pages.sort_by_cached_key(|page| page.title.to_lowercase());
        }

        Self { folders }
    }

    pub fn folders(&self) -> &[(Folder, Vec<ListedPage>)] {
        &self.folders
    }

    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);
        for (folder, pages) in self.folders() {
            html.push_str(&place_in_container("div", None, &folder_html(folder, pages)));
        }
        html
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn folder_html(folder: &Folder, pages: &[ListedPage]) -> String {
    let summary = escape_html(folder.display_name()).replace('/', "/<wbr/>");
    let mut html = format!("<details><summary>{summary}</summary><ul>");
    for page in pages {
        let link = page_link(&page.slug, &page.title);
        if page.description.is_empty() {
            html.push_str(&format!("<li>{link}</li>"));
        } else {
            html.push_str(&format!("<li>{link} - {}</li>", escape_html(&page.description)));
        }
    }
    html.push_str("</ul></details>");
    html
}

// ============================================================================
// Tests
// ============================================================================
