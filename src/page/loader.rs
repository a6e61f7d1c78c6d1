//! Source file loading.
//!
//! Reads one markdown file and turns it into a real [`PageRecord`]: metadata,
//! body, modification stamp, outbound references and the page's own slug.

use super::{PageRecord, frontmatter, frontmatter::FrontMatterError, reference};
use crate::utils::{date::Stamp, slug::page_slug};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Slug of the index page; it is written as `index.html`.
pub const INDEX_SLUG: &str = "index";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("Malformed metadata block in `{0}`")]
    Metadata(PathBuf, #[source] FrontMatterError),
}

/// Load `root/folder/file_name` as a page.
///
/// Missing description defaults to `""`, a missing or empty title to the file
/// stem. Unreadable files and malformed metadata are errors.
pub fn load(
    root: &Path,
    folder: &str,
    file_name: &str,
    is_index: bool,
) -> Result<PageRecord, LoadError> {
    let path = root.join(folder).join(file_name);
    let raw = fs::read_to_string(&path).map_err(|err| LoadError::Io(path.clone(), err))?;
    let (mut metadata, body) =
        frontmatter::parse(&raw).map_err(|err| LoadError::Metadata(path.clone(), err))?;
    let last_modified = Stamp::from_file(&path).map_err(|err| LoadError::Io(path.clone(), err))?;

    let file_stem = Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = metadata
        .remove("title")
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| file_stem.clone());
    let slug = if is_index {
        INDEX_SLUG.to_owned()
    } else {
        page_slug(&title, &file_stem)
    };

    Ok(PageRecord {
        slug,
        folder: Some(folder.to_owned()),
        description: metadata.remove("description").unwrap_or_default(),
        references: reference::extract(body),
        body: Some(body.to_owned()),
        last_modified: Some(last_modified),
        backlinks: Vec::new(),
        title,
        is_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_page(content: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("test-page.md"), content).unwrap();
        dir
    }

    #[test]
    fn test_load_basic() {
        let dir = write_page("---\ntitle: yeah\ndescription: uh huh\n---\n\nThe content");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();

        assert_eq!(page.slug, "yeah");
        assert_eq!(page.folder.as_deref(), Some("sub"));
        assert_eq!(page.title, "yeah");
        assert_eq!(page.description, "uh huh");
        assert_eq!(page.body.as_deref(), Some("The content"));
        assert!(page.last_modified.is_some());
        assert!(page.references.is_empty());
        assert!(page.backlinks.is_empty());
        assert!(!page.is_index);
    }

    #[test]
    fn test_load_no_description() {
        let dir = write_page("---\ntitle: yeah\n---\n\nThe content");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();
        assert_eq!(page.description, "");
    }

    #[test]
    fn test_load_title_falls_back_to_file_stem() {
        let dir = write_page("no metadata at all");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();
        assert_eq!(page.title, "test-page");
        assert_eq!(page.slug, "test-page");
    }

    #[test]
    fn test_load_blank_title_falls_back_to_file_stem() {
        let dir = write_page("---\ntitle: \"  \"\n---\nbody");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();
        assert_eq!(page.title, "test-page");
    }

    #[test]
    fn test_load_links() {
        let dir = write_page("---\ntitle: yeah\n---\n\nThe {{content}} and then...\n\n{{another}}!");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();

        let labels: Vec<_> = page.references.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["content", "another"]);
        assert_eq!(page.body.as_deref(), Some("The {{content}} and then...\n\n{{another}}!"));
    }

    #[test]
    fn test_load_index() {
        let dir = write_page("---\ntitle: yeah\n---\n\nThe content");
        let page = load(dir.path(), "sub", "test-page.md", true).unwrap();
        assert!(page.is_index);
        assert_eq!(page.slug, INDEX_SLUG);
        assert_eq!(page.title, "yeah");
    }

    #[test]
    fn test_load_reserved_title() {
        let dir = write_page("---\ntitle: Index\n---\n");
        let page = load(dir.path(), "sub", "test-page.md", false).unwrap();
        assert_eq!(page.slug, "index_");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path(), "", "missing.md", false);
        assert!(matches!(result, Err(LoadError::Io(..))));
    }

    #[test]
    fn test_load_malformed_metadata() {
        let dir = write_page("---\ntitle: [oops\n---\nbody");
        let result = load(dir.path(), "sub", "test-page.md", false);
        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Metadata(..)));
        assert!(err.to_string().contains("test-page.md"));
    }
}
