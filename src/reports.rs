/// Aggregate Query Module
///
/// Reporting queries that group articles by a parent reference and rank
/// the parents by count. Each call runs a fresh grouped query, so the
/// answer reflects whatever the store holds at query time.
///
/// Tie-break: among parents with equal article counts the one with the
/// lowest id wins. The ordering is part of the query, never left to
/// store iteration order.
use crate::core::Result;
use crate::db::ConnectionProvider;
use crate::model::{Author, Magazine};
use crate::repo::{Authors, Magazines};
use rusqlite::OptionalExtension;

/// The magazine with the most articles, `None` when no magazine has any.
pub fn top_publisher(provider: &dyn ConnectionProvider) -> Result<Option<Magazine>> {
    let conn = provider.connection()?;
    let magazine = conn
        .query_row(
            "SELECT m.id, m.name, m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             GROUP BY m.id
             ORDER BY COUNT(a.id) DESC, m.id ASC
             LIMIT 1",
            [],
            Magazines::from_row,
        )
        .optional()?;
    Ok(magazine)
}

/// The author with the most articles, `None` when no articles exist.
pub fn most_prolific(provider: &dyn ConnectionProvider) -> Result<Option<Author>> {
    let conn = provider.connection()?;
    let author = conn
        .query_row(
            "SELECT au.id, au.name, au.email, au.bio, au.created_at
             FROM authors au
             JOIN articles a ON a.author_id = au.id
             GROUP BY au.id
             ORDER BY COUNT(a.id) DESC, au.id ASC
             LIMIT 1",
            [],
            Authors::from_row,
        )
        .optional()?;
    Ok(author)
}
