use super::Library;
use crate::model::{Author, Book};
use crate::store::Store;

/// The author a book points at, if the reference is set and resolves.
pub(crate) fn author_of(store: &Store, book: &Book) -> Option<Author> {
    let author_id = book.author_id.as_deref()?;
    store.authors().find_by_id(author_id).cloned()
}

/// Every book pointing at `author`, in collection order.
pub(crate) fn books_of(store: &Store, author: &Author) -> Vec<Book> {
    store.books().filter(|book| book.is_by(&author.id))
}

impl Library {
    /// Resolve `Book.author`. Computed on every call; nothing is cached.
    pub fn resolve_book_author(&self, book: &Book) -> Option<Author> {
        self.read(|store| author_of(store, book))
    }

    /// Resolve `Author.books`. Empty, never absent, when nothing matches.
    pub fn resolve_author_books(&self, author: &Author) -> Vec<Book> {
        self.read(|store| books_of(store, author))
    }
}
