//! Fatal build errors.
//!
//! Every variant aborts the run; the message is shown to the operator as-is.

use crate::page::LoadError;
use std::fmt;
use thiserror::Error;

/// Where a page came from, for error messages: `folder/title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub title: String,
    pub folder: Option<String>,
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.folder.as_deref() {
            Some(folder) if !folder.is_empty() => write!(f, "{folder}/{}", self.title),
            _ => f.write_str(&self.title),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(
        "Page \"{incoming}\" with slug \"{slug}\" conflicts with page \"{existing}\" with slug \"{slug}\""
    )]
    SlugCollision {
        slug: String,
        existing: PageLocation,
        incoming: PageLocation,
    },

    #[error("File \"{incoming}\" conflicts with another file \"{existing}\"")]
    MediaCollision { existing: String, incoming: String },

    #[error("Index page \"{incoming}\" conflicts with index page \"{existing}\"")]
    DuplicateIndex {
        existing: PageLocation,
        incoming: PageLocation,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}
