use crate::core::{NewsdeskError, Result};
use crate::db::ConnectionProvider;
use crate::model::Article;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

const ARTICLE_COLUMNS: &str = "id, title, content, author_id, magazine_id, published_at";

/// Repository for [`Article`] records.
pub struct Articles<'a> {
    provider: &'a dyn ConnectionProvider,
}

impl<'a> Articles<'a> {
    pub fn new(provider: &'a dyn ConnectionProvider) -> Self {
        Articles { provider }
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Article> {
        Ok(Article {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            content: row.get(2)?,
            author_id: row.get(3)?,
            magazine_id: row.get(4)?,
            published_at: row.get(5)?,
        })
    }

    /// Validates and inserts a transient article, returning it with its
    /// store-assigned id and publication timestamp.
    ///
    /// Whether the referenced author and magazine rows exist is enforced
    /// by the store's foreign keys; a dangling reference surfaces as a
    /// `Database` error from the insert.
    pub fn create(&self, mut article: Article) -> Result<Article> {
        self.save(&mut article)?;
        Ok(article)
    }

    /// Inserts (id absent) or updates all mutable fields (id present).
    ///
    /// `published_at` is store-assigned and immutable; updates never touch it.
    pub fn save(&self, article: &mut Article) -> Result<()> {
        article.validate()?;
        let conn = self.provider.connection()?;
        match article.id {
            None => {
                conn.execute(
                    "INSERT INTO articles (title, content, author_id, magazine_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        article.title,
                        article.content,
                        article.author_id,
                        article.magazine_id
                    ],
                )?;
                let id = conn.last_insert_rowid();
                article.id = Some(id);
                article.published_at = conn.query_row(
                    "SELECT published_at FROM articles WHERE id = ?1",
                    [id],
                    |row| row.get(0),
                )?;
                debug!(id, "inserted article");
            }
            Some(id) => {
                conn.execute(
                    "UPDATE articles SET title = ?1, content = ?2, author_id = ?3, magazine_id = ?4
                     WHERE id = ?5",
                    params![
                        article.title,
                        article.content,
                        article.author_id,
                        article.magazine_id,
                        id
                    ],
                )?;
                debug!(id, "updated article");
            }
        }
        Ok(())
    }

    /// Single-row lookup; `Ok(None)` when no article has this id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Article>> {
        let conn = self.provider.connection()?;
        let article = conn
            .query_row(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?1"),
                [id],
                Self::from_row,
            )
            .optional()?;
        Ok(article)
    }

    /// Case-insensitive substring search on title.
    pub fn find_by_title(&self, fragment: &str) -> Result<Vec<Article>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE LOWER(title) LIKE LOWER(?1)"
        ))?;
        let articles = stmt
            .query_map([format!("%{}%", fragment)], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }

    /// All articles written by the given author.
    pub fn find_by_author(&self, author_id: i64) -> Result<Vec<Article>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = ?1"
        ))?;
        let articles = stmt
            .query_map([author_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }

    /// All articles published in the given magazine.
    pub fn find_by_magazine(&self, magazine_id: i64) -> Result<Vec<Article>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE magazine_id = ?1"
        ))?;
        let articles = stmt
            .query_map([magazine_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }

    /// Every article row, store default order.
    pub fn all(&self) -> Result<Vec<Article>> {
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(&format!("SELECT {ARTICLE_COLUMNS} FROM articles"))?;
        let articles = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }

    /// Removes the row and clears the in-memory id.
    ///
    /// # Errors
    ///
    /// `NotPersisted` if the article has no assigned id.
    pub fn delete(&self, article: &mut Article) -> Result<()> {
        let id = article.id.ok_or(NewsdeskError::NotPersisted("delete"))?;
        let conn = self.provider.connection()?;
        conn.execute("DELETE FROM articles WHERE id = ?1", [id])?;
        article.id = None;
        debug!(id, "deleted article");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteProvider;
    use crate::model::{Author, Magazine};
    use crate::repo::{Authors, Magazines};

    /// Inserts one author and one magazine, returning their ids.
    fn seed_parents(provider: &SqliteProvider) -> (i64, i64) {
        let author = Authors::new(provider)
            .create(Author::new("Jo Doe", "jo@example.com", None).unwrap())
            .unwrap();
        let magazine = Magazines::new(provider)
            .create(Magazine::new("Tech Today", "Technology").unwrap())
            .unwrap();
        (author.id.unwrap(), magazine.id.unwrap())
    }

    #[test]
    fn test_create_and_round_trip() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (author_id, magazine_id) = seed_parents(&provider);
        let repo = Articles::new(&provider);

        let created = repo
            .create(Article::new("Headline", "Body text", author_id, magazine_id).unwrap())
            .unwrap();
        assert!(created.id.is_some());
        assert!(created.published_at.is_some());

        let found = repo.find_by_id(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn test_dangling_author_reference_rejected_by_store() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (_, magazine_id) = seed_parents(&provider);
        let repo = Articles::new(&provider);

        let result = repo.create(Article::new("Headline", "Body", 9999, magazine_id).unwrap());
        assert!(matches!(result, Err(NewsdeskError::Database(_))));
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_title_substring() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (author_id, magazine_id) = seed_parents(&provider);
        let repo = Articles::new(&provider);

        repo.create(Article::new("Rust for Reporters", "Body", author_id, magazine_id).unwrap())
            .unwrap();
        repo.create(Article::new("Cooking at Home", "Body", author_id, magazine_id).unwrap())
            .unwrap();

        let results = repo.find_by_title("RUST").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust for Reporters");
    }

    #[test]
    fn test_find_by_author_and_magazine() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (author_id, magazine_id) = seed_parents(&provider);
        let repo = Articles::new(&provider);

        repo.create(Article::new("One", "Body", author_id, magazine_id).unwrap())
            .unwrap();
        repo.create(Article::new("Two", "Body", author_id, magazine_id).unwrap())
            .unwrap();

        assert_eq!(repo.find_by_author(author_id).unwrap().len(), 2);
        assert_eq!(repo.find_by_magazine(magazine_id).unwrap().len(), 2);
        assert!(repo.find_by_author(author_id + 1).unwrap().is_empty());
    }

    #[test]
    fn test_update_moves_article_between_magazines() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (author_id, magazine_id) = seed_parents(&provider);
        let other_magazine = Magazines::new(&provider)
            .create(Magazine::new("Garden Life", "Lifestyle").unwrap())
            .unwrap();
        let repo = Articles::new(&provider);

        let mut article = repo
            .create(Article::new("Headline", "Body", author_id, magazine_id).unwrap())
            .unwrap();
        article.magazine_id = other_magazine.id;
        repo.save(&mut article).unwrap();

        let found = repo.find_by_id(article.id.unwrap()).unwrap().unwrap();
        assert_eq!(found.magazine_id, other_magazine.id);
    }

    #[test]
    fn test_delete() {
        let provider = SqliteProvider::in_memory().unwrap();
        let (author_id, magazine_id) = seed_parents(&provider);
        let repo = Articles::new(&provider);

        let mut article = repo
            .create(Article::new("Headline", "Body", author_id, magazine_id).unwrap())
            .unwrap();
        repo.delete(&mut article).unwrap();
        assert_eq!(article.id, None);
        assert!(repo.all().unwrap().is_empty());
    }
}
