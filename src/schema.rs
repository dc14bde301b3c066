//! Schema definition for the three entity tables.
//!
//! The referential actions carry the ownership semantics of the domain:
//! deleting an author removes their articles (CASCADE), deleting a
//! magazine orphans its articles in place (SET NULL). Both depend on
//! `PRAGMA foreign_keys = ON`, which the connection provider sets on
//! every connection it hands out.
use crate::core::Result;
use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    bio TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS magazines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    published_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    author_id INTEGER NOT NULL REFERENCES authors (id) ON DELETE CASCADE,
    magazine_id INTEGER REFERENCES magazines (id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_articles_author_id ON articles (author_id);
CREATE INDEX IF NOT EXISTS idx_articles_magazine_id ON articles (magazine_id);
"#;

/// Creates the entity tables if they do not exist yet.
///
/// Safe to call repeatedly; the provider runs it once when it is built.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
