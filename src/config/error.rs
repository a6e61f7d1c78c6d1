//! Errors raised while loading or checking `_wiki/config.toml`.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read wiki config `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("malformed wiki config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid wiki config: {0}")]
    Validation(String),
}
