//! Persistence lifecycle hooks.
//!
//! Records embed a [`UuidKey`] and expose it through [`HasUuidKey`]. The host
//! persistence layer calls [`BeforeCreate::before_create`] once, before the
//! first insert of a record, and aborts the insert if it fails.

use uuid::Uuid;

use crate::error::KeyResult;
use crate::key::UuidKey;

/// Pre-insert lifecycle hook.
pub trait BeforeCreate {
    fn before_create(&mut self) -> KeyResult<()>;
}

/// A record that embeds a UUID primary key.
pub trait HasUuidKey {
    fn uuid_key(&self) -> &UuidKey;

    fn uuid_key_mut(&mut self) -> &mut UuidKey;

    /// Decoded primary key (see [`UuidKey::uuid`]).
    fn uuid(&self) -> KeyResult<Uuid> {
        self.uuid_key().uuid()
    }
}

impl BeforeCreate for UuidKey {
    fn before_create(&mut self) -> KeyResult<()> {
        UuidKey::before_create(self)
    }
}

impl HasUuidKey for UuidKey {
    fn uuid_key(&self) -> &UuidKey {
        self
    }

    fn uuid_key_mut(&mut self) -> &mut UuidKey {
        self
    }
}

/// Implement [`HasUuidKey`] and [`BeforeCreate`] for a record embedding a
/// [`UuidKey`] field.
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Person {
///     id: UuidKey,
///     name: String,
/// }
///
/// uuidkey_core::impl_uuid_key!(Person, id);
/// ```
///
/// Records that need more work in their pre-insert hook implement the traits
/// by hand and call `self.id.before_create()?` first.
#[macro_export]
macro_rules! impl_uuid_key {
    ($t:ty, $field:ident) => {
        impl $crate::HasUuidKey for $t {
            fn uuid_key(&self) -> &$crate::UuidKey {
                &self.$field
            }

            fn uuid_key_mut(&mut self) -> &mut $crate::UuidKey {
                &mut self.$field
            }
        }

        impl $crate::BeforeCreate for $t {
            fn before_create(&mut self) -> $crate::KeyResult<()> {
                self.$field.before_create()
            }
        }
    };
}
