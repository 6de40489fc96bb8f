use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{FileStore, KEY_PROFILE, StorageError};

/// The stored profile record: a `{name}` JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "User".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

#[tracing::instrument(skip(store))]
pub fn load(store: &FileStore) -> Result<Profile, StorageError> {
    let Some(raw) = store.get(KEY_PROFILE)? else {
        return Ok(Profile::default());
    };
    serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        key: KEY_PROFILE.to_string(),
        source,
    })
}

pub fn load_or_default(store: &FileStore) -> Profile {
    load(store).unwrap_or_else(|err| {
        warn!(error = %err, "failed to load profile, using default");
        Profile::default()
    })
}

#[tracing::instrument(skip(store, profile))]
pub fn save(store: &FileStore, profile: &Profile) -> Result<(), StorageError> {
    let payload = serde_json::to_string(profile).map_err(|source| StorageError::Encode {
        key: KEY_PROFILE.to_string(),
        source,
    })?;
    store.set(KEY_PROFILE, &payload)
}

pub fn persist(store: &FileStore, profile: &Profile) {
    if let Err(err) = save(store, profile) {
        warn!(error = %err, "failed to save profile");
    }
}
