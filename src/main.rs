//! linkwiki - A static wiki generator for folders of cross-linked markdown pages.

mod assets;
mod build;
mod cli;
mod config;
mod data;
mod error;
mod generator;
mod page;
mod scan;
mod utils;

use anyhow::Result;
use build::build_wiki;
use clap::Parser;
use cli::Cli;
use config::WikiConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::log::set_verbosity(cli.verbose);

    let config = load_config(&cli)?;
    let summary = build_wiki(&config)?;
    log!(
        "build";
        "{} pages, {} stubs, {} media files, {} stylesheets written to {}",
        summary.pages,
        summary.stubs,
        summary.media,
        summary.stylesheets,
        config.build.output.display()
    );
    Ok(())
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<WikiConfig> {
    let config_path = cli.input.join(scan::WIKI_DIR).join(&cli.config);

    let mut config = if config_path.is_file() {
        WikiConfig::from_path(&config_path)?
    } else {
        WikiConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    if let Some(path) = &config.config_path {
        vlog!(1, "config"; "{}", path.display());
    }

    Ok(config)
}
