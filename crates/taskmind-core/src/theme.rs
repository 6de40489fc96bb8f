use tracing::{debug, warn};

use crate::store::{FileStore, KEY_DARK_MODE, StorageError};

/// Process-wide light/dark flag, loaded once at startup and handed
/// explicitly to the renderer and the screens. Persisted as the literal
/// text `true`/`false` under the dark-mode key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Initial value from the store. An absent, unreadable, or unexpected
    /// payload is Light; the port initializes before any screen runs, so
    /// there is no "not yet loaded" state to model.
    pub fn load(store: &FileStore) -> Theme {
        match store.get(KEY_DARK_MODE) {
            Ok(Some(raw)) => {
                let theme = if raw.trim() == "true" {
                    Theme::Dark
                } else {
                    Theme::Light
                };
                debug!(?theme, "loaded theme");
                theme
            }
            Ok(None) => Theme::Light,
            Err(err) => {
                warn!(error = %err, "failed to load theme, defaulting to light");
                Theme::Light
            }
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Flips and persists. A failed write is logged and dropped; the
    /// in-memory flag still flips for the rest of this invocation.
    pub fn toggle(&mut self, store: &FileStore) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        if let Err(err) = self.save(store) {
            warn!(error = %err, "failed to persist theme");
        }
    }

    fn save(self, store: &FileStore) -> Result<(), StorageError> {
        let payload = if self.is_dark() { "true" } else { "false" };
        store.set(KEY_DARK_MODE, payload)
    }
}
