use crate::core::{NewsdeskError, Result};
use crate::db::ConnectionProvider;
use crate::model::Author;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

const AUTHOR_COLUMNS: &str = "id, name, email, bio, created_at";

/// Repository for [`Author`] records.
pub struct Authors<'a> {
    provider: &'a dyn ConnectionProvider,
}

impl<'a> Authors<'a> {
    pub fn new(provider: &'a dyn ConnectionProvider) -> Self {
        Authors { provider }
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Author> {
        Ok(Author {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            email: row.get(2)?,
            bio: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    /// Validates and inserts a transient author, returning it with its
    /// store-assigned id and creation timestamp.
    ///
    /// # Errors
    ///
    /// `Validation` if a field violates its constraint (no write occurs),
    /// `Conflict` if the email is already taken.
    pub fn create(&self, mut author: Author) -> Result<Author> {
        self.save(&mut author)?;
        Ok(author)
    }

    /// Inserts (id absent) or updates all mutable fields (id present).
    ///
    /// `created_at` is store-assigned and immutable; updates never touch it.
    pub fn save(&self, author: &mut Author) -> Result<()> {
        author.validate()?;
        let conn = self.provider.connection()?;
        match author.id {
            None => {
                conn.execute(
                    "INSERT INTO authors (name, email, bio) VALUES (?1, ?2, ?3)",
                    params![author.name, author.email, author.bio],
                )?;
                let id = conn.last_insert_rowid();
                author.id = Some(id);
                author.created_at = conn.query_row(
                    "SELECT created_at FROM authors WHERE id = ?1",
                    [id],
                    |row| row.get(0),
                )?;
                debug!(id, "inserted author");
            }
            Some(id) => {
                conn.execute(
                    "UPDATE authors SET name = ?1, email = ?2, bio = ?3 WHERE id = ?4",
                    params![author.name, author.email, author.bio, id],
                )?;
                debug!(id, "updated author");
            }
        }
        Ok(())
    }

    /// Single-row lookup; `Ok(None)` when no author has this id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Author>> {
        let conn = self.provider.connection()?;
        let author = conn
            .query_row(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?1"),
                [id],
                Self::from_row,
            )
            .optional()?;
        Ok(author)
    }

    /// Exact-match lookup on the unique email column.
    pub fn find_by_email(&self, email: &str) -> Result<Option<Author>> {
        let conn = self.provider.connection()?;
        let author = conn
            .query_row(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE email = ?1"),
                [email],
                Self::from_row,
            )
            .optional()?;
        Ok(author)
    }

    /// Case-insensitive substring search on name; empty `Vec` when nothing
    /// matches.
    pub fn find_by_name(&self, fragment: &str) -> Result<Vec<Author>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE LOWER(name) LIKE LOWER(?1)"
        ))?;
        let authors = stmt
            .query_map([format!("%{}%", fragment)], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(authors)
    }

    /// Every author row, store default order.
    pub fn all(&self) -> Result<Vec<Author>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!("SELECT {AUTHOR_COLUMNS} FROM authors"))?;
        let authors = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(authors)
    }

    /// Removes the row and clears the in-memory id. The store cascades the
    /// delete to the author's articles.
    ///
    /// # Errors
    ///
    /// `NotPersisted` if the author has no assigned id.
    pub fn delete(&self, author: &mut Author) -> Result<()> {
        let id = author.id.ok_or(NewsdeskError::NotPersisted("delete"))?;
        let conn = self.provider.connection()?;
        conn.execute("DELETE FROM authors WHERE id = ?1", [id])?;
        author.id = None;
        debug!(id, "deleted author");
        Ok(())
    }
}
