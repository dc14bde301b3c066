use crate::core::{NewsdeskError, Result};

/// A piece of writing linking one author to one magazine.
///
/// `magazine_id` is `Option` because deleting a magazine detaches its
/// articles rather than deleting them: a persisted article may legally
/// carry no magazine reference after that. A transient article must name
/// a magazine, which `validate` enforces.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub magazine_id: Option<i64>,
    pub published_at: Option<String>,
}

/// Article fields for the author-with-articles transaction, before an
/// author identity exists to attach them to.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub magazine_id: i64,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        magazine_id: i64,
    ) -> Self {
        ArticleDraft {
            title: title.into(),
            content: content.into(),
            magazine_id,
        }
    }
}

impl Article {
    /// Constructs a transient article, validating the fields up front.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
        magazine_id: i64,
    ) -> Result<Self> {
        let article = Article {
            id: None,
            title: title.into(),
            content: content.into(),
            author_id,
            magazine_id: Some(magazine_id),
            published_at: None,
        };
        article.validate()?;
        Ok(article)
    }

    /// Checks every field constraint without touching the store.
    ///
    /// Whether the referenced author and magazine rows actually exist is
    /// the store's referential constraint to enforce; this only checks
    /// that the references are positive.
    pub fn validate(&self) -> Result<()> {
        let title_len = self.title.chars().count();
        if title_len < 1 || title_len > 255 {
            return Err(NewsdeskError::validation(
                "title",
                "Title must be between 1 and 255 characters",
            ));
        }
        if self.content.is_empty() {
            return Err(NewsdeskError::validation(
                "content",
                "Content must be a non-empty string",
            ));
        }
        if self.author_id <= 0 {
            return Err(NewsdeskError::validation(
                "author_id",
                "Author reference must be a positive integer",
            ));
        }
        match self.magazine_id {
            Some(magazine_id) if magazine_id <= 0 => {
                return Err(NewsdeskError::validation(
                    "magazine_id",
                    "Magazine reference must be a positive integer",
                ));
            }
            // Only an already-persisted article may lack a magazine
            // reference (it was detached by a magazine delete).
            None if self.id.is_none() => {
                return Err(NewsdeskError::validation(
                    "magazine_id",
                    "A new article must reference a magazine",
                ));
            }
            _ => {}
        }
        Ok(())
    }
}
