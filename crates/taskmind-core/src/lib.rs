pub mod cli;
pub mod config;
pub mod date;
pub mod derive;
pub mod list;
pub mod note;
pub mod profile;
pub mod render;
pub mod screens;
pub mod store;
pub mod task;
pub mod theme;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::info;

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;
    info!(verbose = cli.verbose, quiet = cli.quiet, "starting taskmind");

    let cfg = config::Config::load(cli.config.as_deref())?;

    let data_dir = config::resolve_data_dir(&cfg, cli.data.as_deref())
        .context("failed to resolve data directory")?;

    let store = store::FileStore::open(&data_dir)
        .with_context(|| format!("failed to open store at {}", data_dir.display()))?;

    let theme = theme::Theme::load(&store);
    let renderer = render::Renderer::new(&cfg, theme)?;

    let screen = cli.screen.unwrap_or(cli::Screen::Home);
    screens::dispatch(&store, &renderer, theme, screen)?;

    info!("done");
    Ok(())
}
