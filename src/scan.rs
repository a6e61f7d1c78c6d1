//! Input directory scanning.
//!
//! Produces the ordered list of source files a build processes. Order is part
//! of the output contract (it decides which page claims a slug first and the
//! order of backlinks), so it never depends on the filesystem:
//!
//! - within a directory, files come before subdirectories
//! - entries of the same kind are sorted by file name
//! - subdirectories are walked depth-first
//!
//! Entries whose name starts with `_` are skipped along with everything below
//! them; this keeps the `_wiki` support directory out of the page set.

use anyhow::{Context, Result};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

/// Support directory holding config, frame, index page and stylesheets.
pub const WIKI_DIR: &str = "_wiki";

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Prefix marking files and folders the scan skips.
const HIDDEN_PREFIX: char = '_';

const PAGE_EXTENSION: &str = "md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Markdown page, loaded into the graph.
    Page,
    /// Anything else, copied to the output as-is.
    Media,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Directory relative to the input root, `/`-separated, `""` for the root.
    pub folder: String,
    pub file_name: String,
    pub kind: SourceKind,
}

impl SourceEntry {
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.folder).join(&self.file_name)
    }

    /// `folder/file_name`, or just the file name at the root.
    pub fn relative(&self) -> String {
        if self.folder.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", self.folder, self.file_name)
        }
    }
}

/// Walk `root` and list every page and media file in build order.
pub fn scan(root: &Path) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if IGNORED_FILES.contains(&file_name.as_str()) {
            continue;
        }

        let kind = match entry.path().extension() {
            Some(ext) if ext == PAGE_EXTENSION => SourceKind::Page,
            _ => SourceKind::Media,
        };
        entries.push(SourceEntry {
            folder: relative_folder(root, entry.path()),
            file_name,
            kind,
        });
    }

    Ok(entries)
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with(HIDDEN_PREFIX))
}

fn relative_folder(root: &Path, file: &Path) -> String {
    file.parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relatives(entries: &[SourceEntry]) -> Vec<String> {
        entries.iter().map(SourceEntry::relative).collect()
    }

    #[test]
    fn test_scan_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in ["b.md", "a/z.md", "a/a.md", "c.png", "a/deep/x.md", "0.md"] {
            touch(root, rel);
        }

        let entries = scan(root).unwrap();
        assert_eq!(
            relatives(&entries),
            ["0.md", "b.md", "c.png", "a/a.md", "a/z.md", "a/deep/x.md"]
        );
    }

    #[test]
    fn test_scan_kinds() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "page.md");
        touch(dir.path(), "img/cat.png");

        let entries = scan(dir.path()).unwrap();
        assert_eq!(entries[0].kind, SourceKind::Page);
        assert_eq!(entries[1].kind, SourceKind::Media);
        assert_eq!(entries[1].folder, "img");
        assert_eq!(entries[1].path(dir.path()), dir.path().join("img").join("cat.png"));
    }

    #[test]
    fn test_scan_skips_hidden_and_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "_wiki/index.md",
            "_wiki/frame.html",
            "_draft.md",
            "notes/_private/secret.md",
            ".DS_Store",
            "notes/.DS_Store",
            "notes/kept.md",
        ] {
            touch(root, rel);
        }

        let entries = scan(root).unwrap();
        assert_eq!(relatives(&entries), ["notes/kept.md"]);
    }

    #[test]
    fn test_scan_missing_root() {
        assert!(scan(Path::new("/nonexistent/wiki/root")).is_err());
    }
}
