/// Test Utilities Module
///
/// Shared fixtures for the unit and integration suites. Each fixture
/// owns its own in-memory store, so tests running in parallel never
/// observe each other's rows.
use crate::core::Result;
use crate::db::SqliteProvider;
use crate::model::{Article, Author, Magazine};
use crate::repo::{Articles, Authors, Magazines};

/// An isolated in-memory store, optionally pre-seeded.
pub struct DataFixture {
    pub provider: SqliteProvider,
}

impl DataFixture {
    /// Empty store with the schema in place.
    pub fn new() -> Result<Self> {
        Ok(DataFixture {
            provider: SqliteProvider::in_memory()?,
        })
    }

    /// Store seeded with a small, deliberately asymmetric dataset:
    ///
    /// - magazines: "Tech Today" (Technology), "Garden Life" (Lifestyle)
    /// - authors: Anita with three articles (two in Tech Today, one in
    ///   Garden Life), Builder with two (one in each magazine)
    ///
    /// Tech Today therefore carries 3 articles to Garden Life's 2, and
    /// Anita out-publishes Builder 3 to 2, giving the ranking queries an
    /// unambiguous winner.
    pub fn with_sample_data() -> Result<Self> {
        let fixture = Self::new()?;
        let provider = &fixture.provider;

        let magazines = Magazines::new(provider);
        let tech = magazines.create(Magazine::new("Tech Today", "Technology")?)?;
        let garden = magazines.create(Magazine::new("Garden Life", "Lifestyle")?)?;

        let authors = Authors::new(provider);
        let anita = authors.create(Author::new(
            "Anita",
            "anita@example.com",
            Some("Writes about machines".to_string()),
        )?)?;
        let builder = authors.create(Author::new("Builder", "builder@example.com", None)?)?;

        let articles = Articles::new(provider);
        let tech_id = tech.id.unwrap();
        let garden_id = garden.id.unwrap();
        let anita_id = anita.id.unwrap();
        let builder_id = builder.id.unwrap();

        articles.create(Article::new("Keyboards I", "Body", anita_id, tech_id)?)?;
        articles.create(Article::new("Keyboards II", "Body", anita_id, tech_id)?)?;
        articles.create(Article::new("Tomatoes", "Body", anita_id, garden_id)?)?;
        articles.create(Article::new("Compilers", "Body", builder_id, tech_id)?)?;
        articles.create(Article::new("Sheds", "Body", builder_id, garden_id)?)?;

        Ok(fixture)
    }
}
