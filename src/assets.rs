//! Non-page output: media files, stylesheets and stale output cleanup.
//!
//! Media files are copied flat into the output directory, so two media files
//! sharing a file name in different folders cannot both be written.

use crate::{error::BuildError, log, scan::SourceEntry, vlog};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use std::{fs, path::Path};

const STYLESHEET_EXTENSION: &str = "css";
const HTML_EXTENSION: &str = "html";

/// Copies media files to the output, remembering which source claimed each
/// output file name.
#[derive(Debug, Default)]
pub struct MediaCopier {
    /// Output file name → `folder/file` it was copied from.
    copied: FxHashMap<String, String>,
}

impl MediaCopier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, root: &Path, entry: &SourceEntry, output: &Path) -> Result<()> {
        if let Some(existing) = self.copied.get(&entry.file_name) {
            bail!(BuildError::MediaCollision {
                existing: existing.clone(),
                incoming: entry.relative(),
            });
        }

        let source = entry.path(root);
        let dest = output.join(&entry.file_name);
        fs::copy(&source, &dest)
            .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

        vlog!(1, "media"; "{}", entry.relative());
        self.copied.insert(entry.file_name.clone(), entry.relative());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.copied.len()
    }
}

/// Copy every `*.css` file of the wiki directory to the output.
///
/// A missing wiki directory means there is nothing to copy.
pub fn copy_stylesheets(wiki_dir: &Path, output: &Path) -> Result<usize> {
    if !wiki_dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in fs::read_dir(wiki_dir)
        .with_context(|| format!("Failed to read {}", wiki_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != STYLESHEET_EXTENSION) {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        fs::copy(&path, output.join(file_name))
            .with_context(|| format!("Failed to copy stylesheet {}", path.display()))?;
        vlog!(1, "assets"; "{}", file_name.to_string_lossy());
        count += 1;
    }
    Ok(count)
}

/// Delete the `*.html` files directly inside `dir`, leaving everything else.
pub fn delete_current_html(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == HTML_EXTENSION) {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            count += 1;
        }
    }
    if count > 0 {
        log!("clean"; "removed {} html files", count);
    }
    Ok(count)
}
