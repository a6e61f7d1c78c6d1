//! Utility modules for the wiki generator.

pub mod date;
pub mod html;
pub mod log;
pub mod markdown;
pub mod minify;
pub mod slug;
