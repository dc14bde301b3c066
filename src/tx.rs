/// Multi-Row Transaction Module
///
/// The one multi-statement unit in the crate: inserting an author
/// together with a batch of dependent articles, all or nothing.
/// Everything runs inside a single `rusqlite::Transaction`, which rolls
/// back on drop unless committed, so every failure path (validation,
/// referential violation, store error) leaves the store untouched
/// without manual cleanup.
use crate::core::Result;
use crate::db::ConnectionProvider;
use crate::model::{Article, ArticleDraft, Author};
use rusqlite::params;
use tracing::{debug, error};

/// Inserts one author and one article per draft atomically.
///
/// Returns `true` if everything committed, `false` if anything failed
/// and the transaction was rolled back. This is the one entry point
/// that reduces error detail to a boolean; the detail is logged rather
/// than returned, and on `false` the caller must not assume any row or
/// identity exists.
pub fn add_author_with_articles(
    provider: &dyn ConnectionProvider,
    name: &str,
    email: &str,
    bio: Option<&str>,
    drafts: &[ArticleDraft],
) -> bool {
    match insert_author_with_articles(provider, name, email, bio, drafts) {
        Ok(author_id) => {
            debug!(author_id, articles = drafts.len(), "author batch committed");
            true
        }
        Err(e) => {
            error!("author batch rolled back: {}", e);
            false
        }
    }
}

fn insert_author_with_articles(
    provider: &dyn ConnectionProvider,
    name: &str,
    email: &str,
    bio: Option<&str>,
    drafts: &[ArticleDraft],
) -> Result<i64> {
    let author = Author::new(name, email, bio.map(str::to_string))?;

    let mut conn = provider.connection()?;
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO authors (name, email, bio) VALUES (?1, ?2, ?3)",
        params![author.name, author.email, author.bio],
    )?;
    let author_id = tx.last_insert_rowid();

    for draft in drafts {
        // Validation failures abort here; the dropped transaction rolls
        // back the author and any earlier articles.
        let article = Article::new(&draft.title, &draft.content, author_id, draft.magazine_id)?;
        tx.execute(
            "INSERT INTO articles (title, content, author_id, magazine_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                article.title,
                article.content,
                article.author_id,
                article.magazine_id
            ],
        )?;
    }

    tx.commit()?;
    Ok(author_id)
}
