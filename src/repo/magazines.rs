use crate::core::{NewsdeskError, Result};
use crate::db::ConnectionProvider;
use crate::model::Magazine;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

/// Repository for [`Magazine`] records.
pub struct Magazines<'a> {
    provider: &'a dyn ConnectionProvider,
}

impl<'a> Magazines<'a> {
    pub fn new(provider: &'a dyn ConnectionProvider) -> Self {
        Magazines { provider }
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Magazine> {
        Ok(Magazine {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            category: row.get(2)?,
        })
    }

    /// Validates and inserts a transient magazine, returning it with its
    /// store-assigned id.
    pub fn create(&self, mut magazine: Magazine) -> Result<Magazine> {
        self.save(&mut magazine)?;
        Ok(magazine)
    }

    /// Inserts (id absent) or updates all fields (id present).
    pub fn save(&self, magazine: &mut Magazine) -> Result<()> {
        magazine.validate()?;
        let conn = self.provider.connection()?;
        match magazine.id {
            None => {
                conn.execute(
                    "INSERT INTO magazines (name, category) VALUES (?1, ?2)",
                    params![magazine.name, magazine.category],
                )?;
                let id = conn.last_insert_rowid();
                magazine.id = Some(id);
                debug!(id, "inserted magazine");
            }
            Some(id) => {
                conn.execute(
                    "UPDATE magazines SET name = ?1, category = ?2 WHERE id = ?3",
                    params![magazine.name, magazine.category, id],
                )?;
                debug!(id, "updated magazine");
            }
        }
        Ok(())
    }

    /// Single-row lookup; `Ok(None)` when no magazine has this id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Magazine>> {
        let conn = self.provider.connection()?;
        let magazine = conn
            .query_row(
                "SELECT id, name, category FROM magazines WHERE id = ?1",
                [id],
                Self::from_row,
            )
            .optional()?;
        Ok(magazine)
    }

    /// Case-insensitive substring search on name.
    pub fn find_by_name(&self, fragment: &str) -> Result<Vec<Magazine>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, category FROM magazines WHERE LOWER(name) LIKE LOWER(?1)",
        )?;
        let magazines = stmt
            .query_map([format!("%{}%", fragment)], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(magazines)
    }

    /// Exact-match filter on category.
    pub fn find_by_category(&self, category: &str) -> Result<Vec<Magazine>> {
        let conn = self.provider.connection()?;
        let mut stmt =
            conn.prepare("SELECT id, name, category FROM magazines WHERE category = ?1")?;
        let magazines = stmt
            .query_map([category], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(magazines)
    }

    /// Every magazine row, store default order.
    pub fn all(&self) -> Result<Vec<Magazine>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare("SELECT id, name, category FROM magazines")?;
        let magazines = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(magazines)
    }

    /// Removes the row and clears the in-memory id. Articles referencing
    /// this magazine are detached by the store (magazine reference set to
    /// NULL), never deleted, so this succeeds even with articles attached.
    ///
    /// # Errors
    ///
    /// `NotPersisted` if the magazine has no assigned id.
    pub fn delete(&self, magazine: &mut Magazine) -> Result<()> {
        let id = magazine.id.ok_or(NewsdeskError::NotPersisted("delete"))?;
        let conn = self.provider.connection()?;
        conn.execute("DELETE FROM magazines WHERE id = ?1", [id])?;
        magazine.id = None;
        debug!(id, "deleted magazine");
        Ok(())
    }
}
