use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{FileStore, KEY_NOTES, StorageError};

/// A free-text title/content pair. Identity is positional, like tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

fn default_title() -> String {
    "Untitled".to_string()
}

impl Note {
    /// Builds a new note, or `None` when both fields are blank (the add is
    /// a no-op). A blank title with content present becomes "Untitled".
    pub fn new(title: &str, content: &str) -> Option<Self> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return None;
        }

        let title = if title.trim().is_empty() {
            default_title()
        } else {
            title.to_string()
        };

        Some(Self {
            title,
            content: content.to_string(),
        })
    }
}

#[tracing::instrument(skip(store))]
pub fn load(store: &FileStore) -> Result<Vec<Note>, StorageError> {
    let Some(raw) = store.get(KEY_NOTES)? else {
        return Ok(vec![]);
    };
    serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        key: KEY_NOTES.to_string(),
        source,
    })
}

pub fn load_or_default(store: &FileStore) -> Vec<Note> {
    load(store).unwrap_or_else(|err| {
        warn!(error = %err, "failed to load notes, starting empty");
        vec![]
    })
}

#[tracing::instrument(skip(store, notes))]
pub fn save(store: &FileStore, notes: &[Note]) -> Result<(), StorageError> {
    let payload = serde_json::to_string(notes).map_err(|source| StorageError::Encode {
        key: KEY_NOTES.to_string(),
        source,
    })?;
    store.set(KEY_NOTES, &payload)
}

pub fn persist(store: &FileStore, notes: &[Note]) {
    if let Err(err) = save(store, notes) {
        warn!(error = %err, "failed to save notes");
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_rejects_blank_title_and_content() {
        assert!(Note::new("", "").is_none());
        assert!(Note::new("  ", "\n").is_none());
    }

    #[test]
    fn new_defaults_title_when_only_content_given() {
        let note = Note::new("", "remember the milk").unwrap();
        assert_eq!(note.title, "Untitled");
        assert_eq!(note.content, "remember the milk");
    }

    #[test]
    fn empty_content_is_allowed_when_titled() {
        let note = Note::new("Shopping", "").unwrap();
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "");
    }
}
