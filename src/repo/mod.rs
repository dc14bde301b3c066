/// Repository Module
///
/// One repository per entity type, each holding only a borrowed
/// [`ConnectionProvider`](crate::db::ConnectionProvider). Every operation
/// acquires a fresh connection, runs its statement(s), and drops the
/// connection on every exit path. Nothing is cached; every read goes to
/// the store.
///
/// ## Contract
///
/// All three repositories share the same shape:
/// - `create` validates, inserts, and returns the record with its
///   store-assigned id
/// - `save` re-validates and inserts (id absent) or updates all mutable
///   fields (id present); every save issues a write
/// - `find_by_id` returns `Ok(None)` for a missing row, never an error
/// - filtered finders return an empty `Vec` when nothing matches
/// - `delete` requires an assigned id and clears it on the in-memory
///   record once the row is gone
pub mod articles;
pub mod authors;
pub mod magazines;

pub use articles::Articles;
pub use authors::Authors;
pub use magazines::Magazines;
