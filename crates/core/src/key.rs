//! The identifier field embedded by records that use a UUID primary key.
//!
//! The value is kept as raw bytes so it maps onto a plain binary column on any
//! storage engine, including ones without a native UUID type.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KeyError, KeyResult};
use crate::generator::{IdGenerator, RandomV4};

/// UUID primary key stored as a byte sequence.
///
/// Starts empty. [`UuidKey::before_create`] fills it with 16 bytes exactly once;
/// any 16-byte value already present (caller supplied) is kept as is, without
/// checking its version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UuidKey {
    id: Vec<u8>,
}

impl UuidKey {
    /// Length of a populated key in bytes.
    pub const LEN: usize = 16;

    /// An unpopulated key, as held by a record that has not been persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap caller-supplied bytes verbatim.
    ///
    /// The length is not checked here: a 16-byte value is respected by
    /// `before_create`, anything else is replaced by it and rejected by `uuid`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { id: bytes.into() }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            id: marshal(uuid),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.id
    }

    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Whether the key holds exactly 16 bytes.
    pub fn is_populated(&self) -> bool {
        self.id.len() == Self::LEN
    }

    /// Pre-insert hook: make sure the key is populated.
    ///
    /// Leaves a 16-byte value untouched; otherwise stores a fresh random v4 UUID.
    /// Calling it again after population is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Generation`] if no identifier could be produced. The
    /// field is left unchanged and the insert must be aborted.
    pub fn before_create(&mut self) -> KeyResult<()> {
        self.before_create_with(&RandomV4)
    }

    /// [`UuidKey::before_create`] with an explicit generator.
    ///
    /// # Errors
    ///
    /// Propagates the generator's error.
    pub fn before_create_with<G>(&mut self, generator: &G) -> KeyResult<()>
    where
        G: IdGenerator + ?Sized,
    {
        if self.is_populated() {
            return Ok(());
        }

        let uuid = generator.generate()?;
        tracing::trace!(id = %uuid, "generated identifier");
        self.id = marshal(uuid);
        Ok(())
    }

    /// Decode the stored bytes into a structured UUID.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NoIdentifier`] when the key does not hold exactly 16
    /// bytes, and [`KeyError::Decode`] if the decoder rejects the bytes.
    pub fn uuid(&self) -> KeyResult<Uuid> {
        if !self.is_populated() {
            return Err(KeyError::NoIdentifier);
        }
        Uuid::from_slice(&self.id).map_err(|e| KeyError::decode(e.to_string()))
    }
}

/// Canonical 16-byte big-endian layout (time-low first, node last).
fn marshal(uuid: Uuid) -> Vec<u8> {
    uuid.into_bytes().to_vec()
}

impl AsRef<[u8]> for UuidKey {
    fn as_ref(&self) -> &[u8] {
        &self.id
    }
}

impl From<Uuid> for UuidKey {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl TryFrom<&UuidKey> for Uuid {
    type Error = KeyError;

    fn try_from(value: &UuidKey) -> Result<Self, Self::Error> {
        value.uuid()
    }
}

impl FromStr for UuidKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| KeyError::decode(e.to_string()))?;
        Ok(Self::from_uuid(uuid))
    }
}

impl core::fmt::Display for UuidKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.uuid() {
            Ok(uuid) => core::fmt::Display::fmt(&uuid, f),
            Err(_) => f.write_str("<unset>"),
        }
    }
}
