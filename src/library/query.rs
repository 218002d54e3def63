use super::Library;
use crate::model::{Author, Book};

impl Library {
    pub fn list_books(&self) -> Vec<Book> {
        tracing::debug!("Listing books");
        self.read(|store| store.books().snapshot())
    }

    /// `None` when no book has this id; a missing book is not an error.
    pub fn get_book(&self, id: &str) -> Option<Book> {
        tracing::debug!(id = %id, "Getting book");
        self.read(|store| store.books().find_by_id(id).cloned())
    }

    pub fn list_authors(&self) -> Vec<Author> {
        tracing::debug!("Listing authors");
        self.read(|store| store.authors().snapshot())
    }

    pub fn get_author(&self, id: &str) -> Option<Author> {
        tracing::debug!(id = %id, "Getting author");
        self.read(|store| store.authors().find_by_id(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdMode;
    use crate::store::Store;

    #[test]
    fn test_list_books_seeded() {
        let library = Library::seeded(IdMode::Random);
        let books = library.list_books();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "1");
        assert_eq!(books[0].title.as_deref(), Some("The Awakening"));
        assert_eq!(books[1].id, "2");
        assert_eq!(books[1].title.as_deref(), Some("City of Glass"));
    }

    #[test]
    fn test_get_book() {
        let library = Library::seeded(IdMode::Random);
        let book = library.get_book("2").unwrap();
        assert_eq!(book.title.as_deref(), Some("City of Glass"));
    }

    #[test]
    fn test_get_book_missing_is_none() {
        let library = Library::seeded(IdMode::Random);
        assert_eq!(library.get_book("nonexistent"), None);
    }

    #[test]
    fn test_authors() {
        let library = Library::seeded(IdMode::Random);
        let names: Vec<_> = library
            .list_authors()
            .iter()
            .map(|a| a.full_name())
            .collect();
        assert_eq!(names, vec!["Kate Chopin", "Paul Auster"]);

        let author = library.get_author("1").unwrap();
        assert!(author.verified);
        assert_eq!(library.get_author("3"), None);
    }

    #[test]
    fn test_empty_library() {
        let library = Library::new(Store::empty(IdMode::Random));
        assert!(library.list_books().is_empty());
        assert!(library.list_authors().is_empty());
        assert_eq!(library.get_book("1"), None);
    }
}
