//! Persisted layout of the UUID primary key.
//!
//! The key is always a plain binary column holding the 16 raw bytes, even on
//! engines with a native UUID type, so rows move between engines unchanged.

use uuidkey_core::UuidKey;

/// SQL dialects the key column can be declared for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SqlDialect {
    Postgres,
    MySql,
    Sqlite,
}

/// Primary-key column holding a [`UuidKey`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: &'static str,
}

impl KeyColumn {
    /// Minimum capacity of the column in bytes.
    pub const LEN: usize = UuidKey::LEN;

    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Fixed-length binary type for `dialect`.
    pub fn column_type(&self, dialect: SqlDialect) -> &'static str {
        match dialect {
            SqlDialect::Postgres => "BYTEA",
            SqlDialect::MySql => "BINARY(16)",
            SqlDialect::Sqlite => "BLOB",
        }
    }

    /// Column definition for a `CREATE TABLE` statement.
    pub fn definition(&self, dialect: SqlDialect) -> String {
        format!("{} {} PRIMARY KEY", self.name, self.column_type(dialect))
    }
}

impl Default for KeyColumn {
    fn default() -> Self {
        Self::new("id")
    }
}
