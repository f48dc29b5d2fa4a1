//! Infrastructure layer: the persistence side of the UUID key contract.
//!
//! Stores call the record's pre-insert hook before writing it and keep the key
//! as raw bytes in a binary primary-key column.

pub mod schema;
pub mod store;

mod integration_tests;

pub use schema::{KeyColumn, SqlDialect};
pub use store::{InMemoryRecordStore, RecordStore, StoreError};
