/// Entity Records Module
///
/// Plain data records for the three entities, each carrying its own
/// validator. Records hold no connection state and perform no I/O;
/// persistence lives in the `repo` module, traversal in `relations`.
///
/// An entity is transient while `id` is `None` and becomes persistent
/// once a repository write assigns it an identity.
pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticleDraft};
pub use author::Author;
pub use magazine::Magazine;
