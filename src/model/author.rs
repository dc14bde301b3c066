use crate::core::{NewsdeskError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

/// A writer who can own any number of articles.
///
/// `id` and `created_at` are assigned by the store on first save and are
/// `None` on a freshly constructed record. `email` is globally unique at
/// the store boundary; a duplicate surfaces as a `Conflict` at write time,
/// not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: Option<String>,
}

impl Author {
    /// Constructs a transient author, validating the fields up front.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        bio: Option<String>,
    ) -> Result<Self> {
        let author = Author {
            id: None,
            name: name.into(),
            email: email.into(),
            bio,
            created_at: None,
        };
        author.validate()?;
        Ok(author)
    }

    /// Checks every field constraint without touching the store.
    ///
    /// Repositories call this again immediately before each write, so
    /// fields mutated after construction cannot slip past validation.
    pub fn validate(&self) -> Result<()> {
        let name_len = self.name.chars().count();
        if name_len < 2 || name_len > 255 {
            return Err(NewsdeskError::validation(
                "name",
                "Name must be between 2 and 255 characters",
            ));
        }
        if self.email.chars().count() > 255 {
            return Err(NewsdeskError::validation(
                "email",
                "Email must be 255 characters or less",
            ));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(NewsdeskError::validation("email", "Invalid email format"));
        }
        Ok(())
    }
}
