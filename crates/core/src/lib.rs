//! `uuidkey-core` — UUID primary keys for database-mapped records.
//!
//! A record embeds a [`UuidKey`] field. The host persistence layer calls
//! [`BeforeCreate::before_create`] right before the first insert, which fills the
//! field with a random v4 UUID unless the caller already supplied 16 bytes.
//! The structured value is recovered with [`UuidKey::uuid`].

pub mod error;
pub mod generator;
pub mod hooks;
pub mod key;

pub use error::{KeyError, KeyResult};
pub use generator::{IdGenerator, RandomV4};
pub use hooks::{BeforeCreate, HasUuidKey};
pub use key::UuidKey;

pub use uuid::Uuid;
