//! YAML front matter extraction.
//!
//! A page may start with a metadata block:
//!
//! ```text
//! ---
//! title: Example File
//! description: what this page is about
//! ---
//!
//! Body text...
//! ```
//!
//! Scalar values are kept as strings; nested values are re-serialized as YAML.
//! A page without an opening `---` line, or with no closing line, has no
//! metadata and its whole text is the body.

use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Parsed metadata: string keys to string values.
pub type Metadata = BTreeMap<String, String>;

const DELIMITER: &str = "---";
const END_DELIMITER: &str = "...";

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("metadata block must be a mapping of keys to values")]
    NotAMapping,
}

/// Split `raw` into metadata and body.
pub fn parse(raw: &str) -> Result<(Metadata, &str), FrontMatterError> {
    let text = raw.trim_start_matches('\u{feff}');
    let Some((yaml, body)) = split_block(text) else {
        return Ok((Metadata::new(), raw));
    };
    Ok((parse_yaml(yaml)?, body.trim_start_matches(['\r', '\n'])))
}

/// Locate the metadata block, returning `(yaml, rest)`.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == DELIMITER || trimmed == END_DELIMITER {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn parse_yaml(yaml: &str) -> Result<Metadata, FrontMatterError> {
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Metadata::new()),
        Value::Mapping(mapping) => Ok(mapping
            .into_iter()
            .filter_map(|(key, value)| Some((scalar_string(&key)?, value_string(&value))))
            .collect()),
        _ => Err(FrontMatterError::NotAMapping),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => scalar_string(other).unwrap_or_else(|| {
            serde_yaml::to_string(other)
                .unwrap_or_default()
                .trim()
                .to_owned()
        }),
    }
}
