use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;
use uuidkey_core::{BeforeCreate, HasUuidKey, KeyError, UuidKey};

use super::r#trait::{RecordStore, StoreError};

/// In-memory record table keyed by the raw 16-byte primary key.
///
/// Intended for tests/dev.
#[derive(Debug)]
pub struct InMemoryRecordStore<R> {
    rows: RwLock<HashMap<[u8; UuidKey::LEN], R>>,
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    // A panic while holding the lock leaves the map itself intact (rows are
    // cloned before they are inserted), so every access recovers the guard.
    fn read_rows(&self) -> RwLockReadGuard<'_, HashMap<[u8; UuidKey::LEN], R>> {
        self.rows.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_rows(&self) -> RwLockWriteGuard<'_, HashMap<[u8; UuidKey::LEN], R>> {
        self.rows.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Primary-key column value: the stored bytes, verbatim.
fn column_value(key: &UuidKey) -> Result<[u8; UuidKey::LEN], KeyError> {
    key.as_bytes()
        .try_into()
        .map_err(|_| KeyError::NoIdentifier)
}

impl<R> RecordStore<R> for InMemoryRecordStore<R>
where
    R: BeforeCreate + HasUuidKey + Clone + Send + Sync,
{
    fn insert(&self, record: &mut R) -> Result<Uuid, StoreError> {
        if let Err(err) = record.before_create() {
            tracing::warn!(error = %err, "insert aborted by pre-insert hook");
            return Err(err.into());
        }

        let pk = column_value(record.uuid_key())?;
        let id = Uuid::from_bytes(pk);

        let mut rows = self.write_rows();
        match rows.entry(pk) {
            Entry::Occupied(_) => {
                tracing::warn!(%id, "insert rejected: duplicate primary key");
                Err(StoreError::DuplicateKey(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                tracing::debug!(%id, "record inserted");
                Ok(id)
            }
        }
    }

    fn get(&self, id: &Uuid) -> Option<R> {
        self.read_rows().get(id.as_bytes()).cloned()
    }

    fn list(&self) -> Vec<R> {
        self.read_rows().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read_rows().len()
    }
}
