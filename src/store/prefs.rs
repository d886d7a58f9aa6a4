//! Preferences store adapter over the `"preferences"` key.

use crate::errors::{AppError, AppResult};
use crate::models::preferences::Preferences;
use crate::store::kv::{KvStore, PREFERENCES_KEY};

pub struct PrefsStore;

impl PrefsStore {
    /// Load the preferences record, or the defaults when none has been
    /// saved yet.
    pub fn load(store: &mut KvStore) -> AppResult<Preferences> {
        match store.get(PREFERENCES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| AppError::CorruptData {
                key: PREFERENCES_KEY.to_string(),
                source: e,
            }),
            None => Ok(Preferences::default()),
        }
    }

    /// Overwrite the stored preferences wholesale.
    pub fn save(store: &mut KvStore, prefs: &Preferences) -> AppResult<()> {
        let raw = serde_json::to_string(prefs)?;
        store.set(PREFERENCES_KEY, &raw)
    }
}
