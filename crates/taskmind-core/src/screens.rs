//! One module per screen. Every screen follows the same lifecycle as the
//! app it replaces: read its keys from the store, derive, render; any
//! mutation rewrites the full collection.

mod calendar;
mod home;
mod notes;
mod profile;
mod tasks;

use tracing::{debug, instrument};

use crate::cli::Screen;
use crate::render::Renderer;
use crate::store::FileStore;
use crate::theme::Theme;

#[instrument(skip(store, renderer, theme, screen))]
pub fn dispatch(
    store: &FileStore,
    renderer: &Renderer,
    theme: Theme,
    screen: Screen,
) -> anyhow::Result<()> {
    debug!(?screen, "dispatching screen");

    match screen {
        Screen::Home => home::show(store, renderer),
        Screen::Tasks { action } => tasks::run(store, renderer, action),
        Screen::Notes { action } => notes::run(store, renderer, action),
        Screen::Calendar { date } => calendar::show(store, renderer, date),
        Screen::Profile { action } => profile::run(store, renderer, theme, action),
    }
}
