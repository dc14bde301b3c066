/// Connection Provider Module
///
/// This module supplies short-lived database connections to the
/// repositories, resolvers, aggregate queries, and the multi-row
/// transaction. Every operation borrows exactly one connection for its
/// own scope and drops it on every exit path; nothing in the crate
/// holds a connection across operations.
use crate::config::ConnectionConfig;
use crate::core::Result;
use crate::schema;
use rusqlite::Connection;
use tracing::debug;
use uuid::Uuid;

/// Source of per-operation database connections.
///
/// Implementations decide where the store lives; callers only require
/// that each returned connection points at the same database and has
/// foreign-key enforcement switched on.
pub trait ConnectionProvider {
    /// Opens a fresh connection to the backing store.
    fn connection(&self) -> Result<Connection>;
}

/// SQLite-backed provider over either a database file or a named
/// shared-cache in-memory database.
///
/// For the in-memory variant the provider keeps one anchor connection
/// open for its own lifetime; SQLite drops a shared in-memory database
/// when its last connection closes, and per-operation connections are
/// deliberately short-lived.
pub struct SqliteProvider {
    database: String,
    _anchor: Option<Connection>,
}

impl SqliteProvider {
    /// Opens (and if necessary creates) a file-backed store at `path`.
    pub fn open(path: &str) -> Result<Self> {
        let provider = SqliteProvider {
            database: path.to_string(),
            _anchor: None,
        };
        schema::ensure_schema(&provider.connection()?)?;
        debug!(database = %provider.database, "opened file-backed store");
        Ok(provider)
    }

    /// Builds a provider from injected connection parameters.
    ///
    /// Only `database` is consumed here; see [`ConnectionConfig`] for why
    /// the network fields exist.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        Self::open(&config.database)
    }

    /// Creates a private in-memory store with a unique name.
    ///
    /// Each call yields an independent database, so parallel tests never
    /// observe each other's rows.
    pub fn in_memory() -> Result<Self> {
        let database = format!("file:newsdesk-{}?mode=memory&cache=shared", Uuid::new_v4());
        let anchor = Connection::open(&database)?;
        let provider = SqliteProvider {
            database,
            _anchor: Some(anchor),
        };
        schema::ensure_schema(&provider.connection()?)?;
        Ok(provider)
    }
}

impl ConnectionProvider for SqliteProvider {
    fn connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.database)?;
        // SQLite ships with foreign keys off; cascade and detach both need them
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}
