use super::Library;
use crate::model::{Author, AuthorEdits, Book, BookEdits, NewAuthor, NewBook};

impl Library {
    pub fn add_book(&self, input: NewBook) -> Book {
        self.write(|store| {
            let id = store.generate_id();
            let book = input.into_book(id);
            tracing::info!(id = %book.id, title = ?book.title, "Adding book");
            store.books_mut().append(book.clone());
            book
        })
    }

    /// Remove every book with this id and return the books that remain.
    pub fn delete_book(&self, id: &str) -> Vec<Book> {
        self.write(|store| {
            let remaining = store.books().filter(|book| book.id != id);
            let removed = store.books().len() - remaining.len();
            tracing::info!(id = %id, removed, "Deleting book");
            store.books_mut().replace(remaining.clone());
            remaining
        })
    }

    /// Merge `edits` into the book with this id. `None` if there is none.
    pub fn update_book(&self, id: &str, edits: BookEdits) -> Option<Book> {
        self.write(|store| {
            let book = store.books_mut().find_by_id_mut(id)?;
            tracing::info!(id = %id, "Updating book");
            book.apply(edits);
            Some(book.clone())
        })
    }

    pub fn add_author(&self, input: NewAuthor) -> Author {
        self.write(|store| {
            let id = store.generate_id();
            let author = input.into_author(id);
            tracing::info!(id = %author.id, name = %author.full_name(), "Adding author");
            store.authors_mut().append(author.clone());
            author
        })
    }

    /// Remove every author with this id and return the authors that remain.
    /// Books referencing the author keep their `author_id`.
    pub fn delete_author(&self, id: &str) -> Vec<Author> {
        self.write(|store| {
            let remaining = store.authors().filter(|author| author.id != id);
            let removed = store.authors().len() - remaining.len();
            tracing::info!(id = %id, removed, "Deleting author");
            store.authors_mut().replace(remaining.clone());
            remaining
        })
    }

    pub fn update_author(&self, id: &str, edits: AuthorEdits) -> Option<Author> {
        self.write(|store| {
            let author = store.authors_mut().find_by_id_mut(id)?;
            tracing::info!(id = %id, "Updating author");
            author.apply(edits);
            Some(author.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdMode;

    fn ids<T: crate::model::Record>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_add_book_round_trip() {
        let library = Library::seeded(IdMode::Random);
        let book = library.add_book(NewBook::new("X"));
        assert!(!book.id.is_empty());
        assert_eq!(book.title.as_deref(), Some("X"));
        assert_eq!(book.author_id, None);
        assert_eq!(library.get_book(&book.id), Some(book.clone()));
        assert_eq!(library.list_books().last(), Some(&book));
    }

    #[test]
    fn test_add_book_sequential_id() {
        let library = Library::seeded(IdMode::Sequential);
        let book = library.add_book(NewBook::new("The Storm"));
        assert_eq!(book.id, "3");
    }

    #[test]
    fn test_update_book_title_keeps_author() {
        let library = Library::seeded(IdMode::Random);
        let updated = library
            .update_book("1", BookEdits::default().title("Y"))
            .unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.title.as_deref(), Some("Y"));
        assert_eq!(updated.author_id.as_deref(), Some("1"));
        assert_eq!(library.get_book("1"), Some(updated));
    }

    #[test]
    fn test_update_book_missing_is_none() {
        let library = Library::seeded(IdMode::Random);
        let before = library.list_books();
        assert_eq!(
            library.update_book("nope", BookEdits::default().title("Y")),
            None
        );
        assert_eq!(library.list_books(), before);
    }

    #[test]
    fn test_update_book_clears_author() {
        let library = Library::seeded(IdMode::Random);
        let updated = library
            .update_book("2", BookEdits::default().clear_author())
            .unwrap();
        assert_eq!(updated.author_id, None);
        assert_eq!(updated.title.as_deref(), Some("City of Glass"));
    }

    #[test]
    fn test_delete_book_returns_remaining() {
        let library = Library::seeded(IdMode::Random);
        let remaining = library.delete_book("1");
        assert_eq!(ids(&remaining), vec!["2"]);
        assert_eq!(library.list_books(), remaining);
        assert_eq!(library.get_book("1"), None);
    }

    #[test]
    fn test_delete_missing_book_returns_all() {
        let library = Library::seeded(IdMode::Random);
        let remaining = library.delete_book("42");
        assert_eq!(ids(&remaining), vec!["1", "2"]);
    }

    #[test]
    fn test_deleted_id_not_reused() {
        let library = Library::seeded(IdMode::Sequential);
        let book = library.add_book(NewBook::new("Short-lived"));
        library.delete_book(&book.id);
        let next = library.add_book(NewBook::new("Next"));
        assert_ne!(next.id, book.id);
    }

    #[test]
    fn test_add_author() {
        let library = Library::seeded(IdMode::Random);
        let author = library.add_author(NewAuthor::new("Harper", "Lee", false));
        assert!(!author.id.is_empty());
        assert_eq!(author.full_name(), "Harper Lee");
        assert!(!author.verified);
        assert_eq!(library.get_author(&author.id), Some(author));
    }

    #[test]
    fn test_update_author_partial() {
        let library = Library::seeded(IdMode::Random);
        let updated = library
            .update_author("2", AuthorEdits::default().last_name("Orwell"))
            .unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.full_name(), "Paul Orwell");
        assert!(updated.verified);
    }

    #[test]
    fn test_update_author_missing_is_none() {
        let library = Library::seeded(IdMode::Random);
        assert_eq!(
            library.update_author("404", AuthorEdits::default().verified(false)),
            None
        );
    }

    #[test]
    fn test_delete_author_returns_remaining() {
        let library = Library::seeded(IdMode::Sequential);
        let harper = library.add_author(NewAuthor::new("Harper", "Lee", false));
        let remaining = library.delete_author("2");
        assert_eq!(ids(&remaining), vec!["1", harper.id.as_str()]);
        assert_eq!(library.list_authors(), remaining);
    }

    #[test]
    fn test_updates_never_change_ids() {
        let library = Library::seeded(IdMode::Random);
        let book = library
            .update_book(
                "1",
                BookEdits::default().title("New").author_id("2"),
            )
            .unwrap();
        assert_eq!(book.id, "1");

        let author = library
            .update_author(
                "1",
                AuthorEdits::default()
                    .first_name("A")
                    .last_name("B")
                    .verified(false),
            )
            .unwrap();
        assert_eq!(author.id, "1");
        assert_eq!(ids(&library.list_books()), vec!["1", "2"]);
        assert_eq!(ids(&library.list_authors()), vec!["1", "2"]);
    }
}
