/// Relationship Resolver Module
///
/// Traversal queries following the foreign keys in both directions.
/// The resolver is injected with a connection provider and delegates
/// single-row parent lookups to the repositories, so the entity modules
/// never reference each other.
///
/// Parent lookups tolerate an absent row (removed out-of-band or
/// detached) by returning `Ok(None)`; absence is never a panic and never
/// an error.
use crate::core::{NewsdeskError, Result};
use crate::db::ConnectionProvider;
use crate::model::{Article, Author, Magazine};
use crate::repo::{Articles, Authors, Magazines};

pub struct Resolver<'a> {
    provider: &'a dyn ConnectionProvider,
}

impl<'a> Resolver<'a> {
    pub fn new(provider: &'a dyn ConnectionProvider) -> Self {
        Resolver { provider }
    }

    /// The author who wrote this article, `None` if the row vanished
    /// out-of-band.
    pub fn article_author(&self, article: &Article) -> Result<Option<Author>> {
        Authors::new(self.provider).find_by_id(article.author_id)
    }

    /// The magazine this article appears in, `None` if the article was
    /// detached or the row vanished out-of-band.
    pub fn article_magazine(&self, article: &Article) -> Result<Option<Magazine>> {
        match article.magazine_id {
            Some(magazine_id) => Magazines::new(self.provider).find_by_id(magazine_id),
            None => Ok(None),
        }
    }

    /// All articles written by this author, unordered.
    ///
    /// # Errors
    ///
    /// `NotPersisted` if the author has no assigned id.
    pub fn author_articles(&self, author: &Author) -> Result<Vec<Article>> {
        let id = author
            .id
            .ok_or(NewsdeskError::NotPersisted("author_articles"))?;
        Articles::new(self.provider).find_by_author(id)
    }

    /// The distinct magazines this author has published in, ordered by
    /// magazine id. De-duplication is by identity: publishing three
    /// articles in one magazine yields that magazine once.
    pub fn author_magazines(&self, author: &Author) -> Result<Vec<Magazine>> {
        let id = author
            .id
            .ok_or(NewsdeskError::NotPersisted("author_magazines"))?;
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(
            "SELECT m.id, m.name, m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             WHERE a.author_id = ?1
             GROUP BY m.id
             ORDER BY m.id",
        )?;
        let magazines = stmt
            .query_map([id], Magazines::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(magazines)
    }

    /// The distinct authors who have published in this magazine, ordered
    /// by author id.
    pub fn magazine_contributors(&self, magazine: &Magazine) -> Result<Vec<Author>> {
        let id = magazine
            .id
            .ok_or(NewsdeskError::NotPersisted("magazine_contributors"))?;
        let conn = self.provider.connection()?;
        let mut stmt = conn.prepare(
            "SELECT au.id, au.name, au.email, au.bio, au.created_at
             FROM authors au
             JOIN articles a ON a.author_id = au.id
             WHERE a.magazine_id = ?1
             GROUP BY au.id
             ORDER BY au.id",
        )?;
        let authors = stmt
            .query_map([id], Authors::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(authors)
    }
}
