//! Drive record store adapter: translates between the in-memory ordered
//! sequence of DriveRecord and the single JSON blob held by the kv store.
//!
//! Every mutation is load-entire-collection → mutate → save-entire-collection
//! with no locking; two concurrent CLI invocations race and the last full
//! write wins.

use crate::errors::{AppError, AppResult};
use crate::models::drive::DriveRecord;
use crate::store::kv::{DRIVES_KEY, KvStore};
use uuid::Uuid;

/// High-level operations on the persisted drive collection.
pub struct DriveStore;

impl DriveStore {
    /// Load the full collection, most recent first.
    ///
    /// Read-with-possible-write: records persisted without an id get a fresh
    /// one assigned here, and if any id was assigned the corrected sequence
    /// is written back immediately, so a second load returns the same ids.
    ///
    /// An absent blob is an empty collection; a blob that does not parse is
    /// an explicit `CorruptData` error.
    pub fn load_all(store: &mut KvStore) -> AppResult<Vec<DriveRecord>> {
        let Some(raw) = store.get(DRIVES_KEY)? else {
            return Ok(Vec::new());
        };

        let mut records: Vec<DriveRecord> =
            serde_json::from_str(&raw).map_err(|e| AppError::CorruptData {
                key: DRIVES_KEY.to_string(),
                source: e,
            })?;

        // stable sort keeps the persisted order of equal timestamps
        records.sort_by(|a, b| b.start.cmp(&a.start));

        let mut healed = false;
        for record in &mut records {
            if record.is_legacy() {
                record.id = Uuid::new_v4();
                healed = true;
            }
        }

        if healed {
            Self::save_all(store, &records)?;
        }

        Ok(records)
    }

    /// Serialize the full sequence and overwrite the blob. No merge, no
    /// version check.
    pub fn save_all(store: &mut KvStore, records: &[DriveRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        store.set(DRIVES_KEY, &raw)
    }

    pub fn append(store: &mut KvStore, record: DriveRecord) -> AppResult<()> {
        let mut records = Self::load_all(store)?;
        records.push(record);
        Self::save_all(store, &records)
    }

    /// Remove the record with the given id. Returns whether one matched;
    /// the filtered collection is saved either way.
    pub fn remove_by_id(store: &mut KvStore, id: Uuid) -> AppResult<bool> {
        let mut records = Self::load_all(store)?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        Self::save_all(store, &records)?;
        Ok(removed)
    }

    /// Replace the record with the given id, keeping its stored id.
    /// Returns whether one matched.
    pub fn replace_by_id(store: &mut KvStore, id: Uuid, new: DriveRecord) -> AppResult<bool> {
        let mut records = Self::load_all(store)?;
        let mut replaced = false;
        for record in &mut records {
            if record.id == id {
                *record = DriveRecord { id, ..new.clone() };
                replaced = true;
            }
        }
        Self::save_all(store, &records)?;
        Ok(replaced)
    }

    /// Resolve a full id or a unique id prefix to its record.
    pub fn resolve(store: &mut KvStore, id_or_prefix: &str) -> AppResult<DriveRecord> {
        let needle = id_or_prefix.to_lowercase();
        let records = Self::load_all(store)?;

        let mut matches = records
            .into_iter()
            .filter(|r| r.id.to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(id_or_prefix.to_string())),
            (None, _) => Err(AppError::UnknownId(id_or_prefix.to_string())),
        }
    }
}
