use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;
use uuidkey_core::KeyError;

/// Storage-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record's pre-insert hook failed; nothing was written.
    #[error("pre-insert hook failed: {0}")]
    Hook(#[from] KeyError),

    /// Primary-key constraint: a record with this key already exists.
    #[error("duplicate primary key: {0}")]
    DuplicateKey(Uuid),
}

/// Persistence contract for records keyed by a [`uuidkey_core::UuidKey`].
///
/// ## Insert sequence
///
/// 1. Call `before_create` on the record (populates the key if empty).
/// 2. Abort with [`StoreError::Hook`] if the hook fails.
/// 3. Write the record under its 16 raw key bytes, unchanged.
///
/// Uniqueness of keys is the store's job (primary-key constraint), not the
/// field's.
pub trait RecordStore<R>: Send + Sync {
    /// Insert a new record, returning its decoded primary key.
    ///
    /// The record is mutated in place by the hook, so the caller sees the
    /// generated key afterwards.
    fn insert(&self, record: &mut R) -> Result<Uuid, StoreError>;

    fn get(&self, id: &Uuid) -> Option<R>;

    fn list(&self) -> Vec<R>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R, S> RecordStore<R> for Arc<S>
where
    S: RecordStore<R> + ?Sized,
{
    fn insert(&self, record: &mut R) -> Result<Uuid, StoreError> {
        (**self).insert(record)
    }

    fn get(&self, id: &Uuid) -> Option<R> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<R> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
