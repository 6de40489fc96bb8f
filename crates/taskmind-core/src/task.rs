use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{FileStore, KEY_TASKS, StorageError};

/// A to-do item. Identity is positional: the index in the stored list.
///
/// The wire format is the historical one: `{title, day, value}`, with
/// `day` a `YYYY-MM-DD` string or null and `value` the completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub day: Option<NaiveDate>,

    #[serde(rename = "value", default)]
    pub done: bool,
}

fn default_title() -> String {
    "Untitled".to_string()
}

impl Task {
    /// Builds a new pending task, or `None` when there is nothing to add
    /// (blank title and no day). A blank title with a day present falls
    /// back to "Untitled".
    pub fn new(title: &str, day: Option<NaiveDate>) -> Option<Self> {
        let trimmed = title.trim();
        if trimmed.is_empty() && day.is_none() {
            return None;
        }

        let title = if trimmed.is_empty() {
            default_title()
        } else {
            title.to_string()
        };

        Some(Self {
            title,
            day,
            done: false,
        })
    }
}

/// Flips the completion flag of the task at `index`, leaving every other
/// field and element untouched. Out-of-range indices leave the list as-is.
pub fn set_done_at(tasks: Vec<Task>, index: usize, done: bool) -> Vec<Task> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, mut task)| {
            if i == index {
                task.done = done;
            }
            task
        })
        .collect()
}

#[tracing::instrument(skip(store))]
pub fn load(store: &FileStore) -> Result<Vec<Task>, StorageError> {
    let Some(raw) = store.get(KEY_TASKS)? else {
        return Ok(vec![]);
    };
    serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        key: KEY_TASKS.to_string(),
        source,
    })
}

/// Screen-mount load: a failed or malformed read degrades to an empty
/// list, logged and swallowed.
pub fn load_or_default(store: &FileStore) -> Vec<Task> {
    load(store).unwrap_or_else(|err| {
        warn!(error = %err, "failed to load tasks, starting empty");
        vec![]
    })
}

#[tracing::instrument(skip(store, tasks))]
pub fn save(store: &FileStore, tasks: &[Task]) -> Result<(), StorageError> {
    let payload = serde_json::to_string(tasks).map_err(|source| StorageError::Encode {
        key: KEY_TASKS.to_string(),
        source,
    })?;
    store.set(KEY_TASKS, &payload)
}

/// Full rewrite after a mutation. A failed write is logged and dropped;
/// the prior on-disk state stays authoritative.
pub fn persist(store: &FileStore, tasks: &[Task]) {
    if let Err(err) = save(store, tasks) {
        warn!(error = %err, "failed to save tasks");
    }
}
