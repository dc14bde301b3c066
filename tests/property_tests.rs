//! Property-based tests for the entity validators.
//!
//! These verify that construction accepts every field set inside the
//! declared bounds, rejects every field set outside them naming the
//! right field, and that any valid record survives a store round trip
//! unchanged.

use newsdesk::core::NewsdeskError;
use newsdesk::db::SqliteProvider;
use newsdesk::model::{Article, Author, Magazine};
use newsdesk::repo::{Articles, Authors, Magazines};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z '.-]{1,60}"
}

fn arb_email() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}(\\.[a-z0-9]{1,8})?@[a-z0-9]{1,12}\\.[a-z]{2,6}"
}

fn arb_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>().prop_filter("printable", |c| !c.is_control()), 1..max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn field_of(err: NewsdeskError) -> &'static str {
    match err {
        NewsdeskError::Validation { field, .. } => field,
        other => panic!("Expected Validation, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn valid_authors_always_construct(name in arb_name(), email in arb_email()) {
        let author = Author::new(name.clone(), email.clone(), None).unwrap();
        prop_assert_eq!(author.name, name);
        prop_assert_eq!(author.email, email);
        prop_assert_eq!(author.id, None);
    }

    #[test]
    fn single_char_author_names_never_construct(name in "[A-Za-z]", email in arb_email()) {
        let err = Author::new(name, email, None).unwrap_err();
        prop_assert_eq!(field_of(err), "name");
    }

    #[test]
    fn emails_without_an_at_sign_never_construct(name in arb_name(), email in "[a-z0-9.]{1,30}") {
        let err = Author::new(name, email, None).unwrap_err();
        prop_assert_eq!(field_of(err), "email");
    }

    #[test]
    fn magazine_bounds_are_sharp(name in arb_text(100), category in arb_text(50)) {
        prop_assert!(Magazine::new(name, category).is_ok());
    }

    #[test]
    fn oversize_magazine_category_rejected(name in arb_text(100), pad in 51usize..80) {
        let err = Magazine::new(name, "c".repeat(pad)).unwrap_err();
        prop_assert_eq!(field_of(err), "category");
    }

    #[test]
    fn non_positive_article_references_rejected(
        title in arb_text(255),
        author_id in -20i64..=0,
    ) {
        let err = Article::new(title, "Body", author_id, 1).unwrap_err();
        prop_assert_eq!(field_of(err), "author_id");
    }

    #[test]
    fn valid_records_round_trip_through_the_store(
        name in arb_name(),
        email in arb_email(),
        magazine_name in arb_text(100),
        category in arb_text(50),
        title in arb_text(255),
        content in arb_text(400),
    ) {
        let provider = SqliteProvider::in_memory().unwrap();

        let author = Authors::new(&provider)
            .create(Author::new(name, email, None).unwrap())
            .unwrap();
        let magazine = Magazines::new(&provider)
            .create(Magazine::new(magazine_name, category).unwrap())
            .unwrap();
        let article = Articles::new(&provider)
            .create(
                Article::new(title, content, author.id.unwrap(), magazine.id.unwrap()).unwrap(),
            )
            .unwrap();

        let found_author = Authors::new(&provider)
            .find_by_id(author.id.unwrap())
            .unwrap()
            .unwrap();
        prop_assert_eq!(found_author, author);

        let found_magazine = Magazines::new(&provider)
            .find_by_id(magazine.id.unwrap())
            .unwrap()
            .unwrap();
        prop_assert_eq!(found_magazine, magazine);

        let found_article = Articles::new(&provider)
            .find_by_id(article.id.unwrap())
            .unwrap()
            .unwrap();
        prop_assert_eq!(found_article, article);
    }
}
