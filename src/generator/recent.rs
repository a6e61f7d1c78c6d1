//! Most recently modified pages, shown on the index page.
//!
//! # Output Format
//!
//! ```html
//! <section class="recent-list"><h2>Recent Changes:</h2><ul>
//!   <li>202401311200: <a href="newest.html">Newest</a></li>
//!   <li>202401301000: <a href="older.html">Older</a></li>
//! </ul></section>
//! ```

use crate::{
    page::PageRecord,
    utils::{date::Stamp, html::page_link},
};

/// One listed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub stamp: Stamp,
    pub title: String,
    pub slug: String,
}

impl RecentEntry {
    /// Entry for a real page; placeholders and the index are never listed.
    pub fn from_page(page: &PageRecord) -> Option<Self> {
        if page.is_index {
            return None;
        }
        let stamp = page.last_modified.clone()?;
        Some(Self {
            stamp,
            title: page.title.clone(),
            slug: page.slug.clone(),
        })
    }
}

/// Bounded list of the newest entries, newest first.
///
/// Entries with equal stamps stay in insertion order.
#[derive(Debug, Clone)]
pub struct RecentList {
    max_length: usize,
    entries: Vec<RecentEntry>,
}

impl RecentList {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            entries: Vec::with_capacity(max_length),
        }
    }

    /// Collect the newest real pages in `pages`, visited in discovery order.
    pub fn from_pages<'a>(pages: impl IntoIterator<Item = &'a PageRecord>, max_length: usize) -> Self {
        let mut list = Self::new(max_length);
        for entry in pages.into_iter().filter_map(RecentEntry::from_page) {
            list.insert(entry);
        }
        list
    }

    /// Insert `entry` at its place, dropping the oldest entry past capacity.
    ///
    /// Returns false, leaving the list unchanged, when the list is full and
    /// `entry` is not newer than its last entry.
    pub fn insert(&mut self, entry: RecentEntry) -> bool {
        let position = self.entries.partition_point(|e| e.stamp >= entry.stamp);
        if position >= self.max_length {
            return false;
        }
        self.entries.insert(position, entry);
        self.entries.truncate(self.max_length);
        true
    }

    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<section class="recent-list"><h2>Recent Changes:</h2><ul>"#);
        for entry in self.entries() {
            html.push_str(&format!(
                "<li>{}: {}</li>",
                entry.stamp,
                page_link(&entry.slug, &entry.title)
            ));
        }
        html.push_str("</ul></section>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(stamp: &str, slug: &str) -> RecentEntry {
        RecentEntry {
            stamp: Stamp::parse(stamp).unwrap(),
            title: slug.to_uppercase(),
            slug: slug.into(),
        }
    }

    fn slugs(list: &RecentList) -> Vec<&str> {
        list.entries().iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_insert_orders_newest_first() {
        let mut list = RecentList::new(5);
        list.insert(entry("202401010000", "a"));
        list.insert(entry("202403010000", "b"));
        list.insert(entry("202402010000", "c"));
        assert_eq!(slugs(&list), ["b", "c", "a"]);
    }

    #[test]
    fn test_insert_bounded() {
        let mut list = RecentList::new(2);
        list.insert(entry("202401010000", "a"));
        list.insert(entry("202402010000", "b"));
        assert!(list.insert(entry("202403010000", "c")));
        assert_eq!(slugs(&list), ["c", "b"]);
    }

    #[test]
    fn test_insert_older_than_full_list_is_noop() {
        let mut list = RecentList::new(2);
        list.insert(entry("202402010000", "a"));
        list.insert(entry("202403010000", "b"));
        assert!(!list.insert(entry("202401010000", "old")));
        assert_eq!(slugs(&list), ["b", "a"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut list = RecentList::new(3);
        list.insert(entry("202401010000", "first"));
        list.insert(entry("202401010000", "second"));
        list.insert(entry("202401010000", "third"));
        assert!(!list.insert(entry("202401010000", "fourth")));
        assert_eq!(slugs(&list), ["first", "second", "third"]);
    }

    #[test]
    fn test_from_pages_skips_placeholders_and_index() {
        let real = PageRecord {
            folder: Some(String::new()),
            last_modified: Stamp::parse("202401010000"),
            ..PageRecord::placeholder("real".into(), "Real")
        };
        let index = PageRecord {
            is_index: true,
            ..real.clone()
        };
        let stub = PageRecord::placeholder("stub".into(), "Stub");

        let list = RecentList::from_pages([&real, &index, &stub], 10);
        assert_eq!(slugs(&list), ["real"]);
    }

    #[test]
    fn test_to_html() {
        let mut list = RecentList::new(2);
        list.insert(entry("202401311200", "newest"));
        assert_eq!(
            list.to_html(),
            r#"<section class="recent-list"><h2>Recent Changes:</h2><ul><li>202401311200: <a href="newest.html">NEWEST</a></li></ul></section>"#
        );
    }
}
