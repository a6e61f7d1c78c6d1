//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Build a cross-linked static wiki from a folder of markdown pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the wiki pages
    pub input: PathBuf,

    /// Directory the html output is written to
    pub output: PathBuf,

    /// Config file name inside `<INPUT>/_wiki` (default: config.toml)
    #[arg(short = 'C', long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub build_args: BuildArgs,

    /// Print build details. Use -vv for graph decisions as well
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Build arguments overriding `[build]` values from the config file
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Delete all html in the output directory before building
    #[arg(short = 'd', long, visible_alias = "delete-current-html")]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// List the most recently modified pages on the index page
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub recent_list: Option<bool>,

    /// Length of the most recently modified pages list
    #[arg(long)]
    pub recent_list_length: Option<usize>,

    /// Write every page into one `full.html`
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub full_dump: Option<bool>,
}
