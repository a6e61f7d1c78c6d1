//! Page frame: the HTML document every output page is placed in.
//!
//! The frame is read from `_wiki/frame.html` and may use three placeholders:
//!
//! | Placeholder       | Replaced with                 |
//! |-------------------|-------------------------------|
//! | `{{title}}`       | page title (escaped)          |
//! | `{{description}}` | page description (escaped)    |
//! | `{{content}}`     | rendered page content         |
//!
//! Any other `{{...}}` in the frame is left as written.

use crate::{
    page::reference::{self, Reference},
    utils::html::escape_html,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub const FRAME_FILE: &str = "frame.html";

/// Frame used when the wiki has no `frame.html`.
pub const DEFAULT_FRAME: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{{description}}">
<title>{{title}}</title>
</head>
<body>
<nav><a href="index.html">Index</a></nav>
{{content}}
</body>
</html>
"#;

#[derive(Debug, Clone)]
pub struct Frame {
    template: String,
    slots: Vec<Reference>,
}

impl Frame {
    pub fn new(template: String) -> Self {
        let slots = reference::extract(&template)
            .into_iter()
            .filter(|slot| slot.target.is_none() && Slot::parse(&slot.label).is_some())
            .collect();
        Self { template, slots }
    }

    /// Load `frame.html` from the wiki directory, or the default frame.
    pub fn load(wiki_dir: &Path) -> Result<Self> {
        let path = wiki_dir.join(FRAME_FILE);
        if !path.is_file() {
            return Ok(Self::new(DEFAULT_FRAME.to_owned()));
        }
        let template = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read frame {}", path.display()))?;
        Ok(Self::new(template))
    }

    pub fn fill(&self, title: &str, description: &str, content: &str) -> String {
        reference::substitute(&self.template, &self.slots, |slot| {
            match Slot::parse(&slot.label) {
                Some(Slot::Title) => escape_html(title),
                Some(Slot::Description) => escape_html(description),
                Some(Slot::Content) => content.to_owned(),
                None => self.template[slot.span.clone()].to_owned(),
            }
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Title,
    Description,
    Content,
}

impl Slot {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill() {
        let frame = Frame::new("<title>{{title}}</title><meta content=\"{{ description }}\">{{content}}".into());
        assert_eq!(
            frame.fill("A & B", "desc", "<main>x</main>"),
            "<title>A &amp; B</title><meta content=\"desc\"><main>x</main>"
        );
    }

    #[test]
    fn test_fill_keeps_unknown_placeholders() {
        let frame = Frame::new("{{other}} {{title|x}} {{title}}".into());
        assert_eq!(frame.fill("T", "", ""), "{{other}} {{title|x}} T");
    }

    #[test]
    fn test_fill_does_not_rescan_content() {
        let frame = Frame::new("{{content}}".into());
        assert_eq!(frame.fill("T", "", "{{title}}"), "{{title}}");
    }

    #[test]
    fn test_load_default() {
        let dir = tempfile::tempdir().unwrap();
        let frame = Frame::load(dir.path()).unwrap();
        let html = frame.fill("Home", "", "<main></main>");
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_load_from_wiki_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FRAME_FILE), "<h1>{{title}}</h1>").unwrap();
        let frame = Frame::load(dir.path()).unwrap();
        assert_eq!(frame.fill("Custom", "", ""), "<h1>Custom</h1>");
    }
}
