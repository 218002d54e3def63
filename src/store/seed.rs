use crate::model::{Author, Book};

/// Books present on a freshly seeded store, in order.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1")
            .with_title("The Awakening")
            .with_author_id(Some("1".to_string())),
        Book::new("2")
            .with_title("City of Glass")
            .with_author_id(Some("2".to_string())),
    ]
}

/// Authors present on a freshly seeded store, in order.
pub fn seed_authors() -> Vec<Author> {
    vec![
        Author::new("1", "Kate", "Chopin").with_verified(true),
        Author::new("2", "Paul", "Auster").with_verified(true),
    ]
}
