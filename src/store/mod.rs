//! In-memory storage for books and authors.
//!
//! The [`Store`] owns both collections and the [`IdGenerator`]. It has no
//! locking of its own; shared access goes through [`crate::library::Library`].
//!
//! ## Components
//!
//! - [`Collection`]: insertion-ordered records with find/filter/replace
//! - [`IdGenerator`]: random or sequential numeric string ids
//! - [`seed_books`], [`seed_authors`]: the fixed startup data set

mod collection;
mod ids;
mod seed;

pub use collection::Collection;
pub use ids::{IdGenerator, RANDOM_ID_RANGE};
pub use seed::{seed_authors, seed_books};

use crate::config::{IdMode, StoreSettings};
use crate::model::{Author, Book};

#[derive(Debug, Clone)]
pub struct Store {
    books: Collection<Book>,
    authors: Collection<Author>,
    ids: IdGenerator,
}

impl Store {
    pub fn empty(id_mode: IdMode) -> Self {
        Self::with_records(id_mode, Vec::new(), Vec::new())
    }

    pub fn seeded(id_mode: IdMode) -> Self {
        Self::with_records(id_mode, seed_books(), seed_authors())
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        if settings.seed {
            Self::seeded(settings.id_mode)
        } else {
            Self::empty(settings.id_mode)
        }
    }

    /// Build a store from existing records. Their ids are reserved so the
    /// generator never hands them out again.
    pub fn with_records(id_mode: IdMode, books: Vec<Book>, authors: Vec<Author>) -> Self {
        let mut ids = IdGenerator::new(id_mode);
        for book in &books {
            ids.reserve(&book.id);
        }
        for author in &authors {
            ids.reserve(&author.id);
        }
        Self {
            books: Collection::from_items(books),
            authors: Collection::from_items(authors),
            ids,
        }
    }

    pub fn books(&self) -> &Collection<Book> {
        &self.books
    }

    pub fn books_mut(&mut self) -> &mut Collection<Book> {
        &mut self.books
    }

    pub fn authors(&self) -> &Collection<Author> {
        &self.authors
    }

    pub fn authors_mut(&mut self) -> &mut Collection<Author> {
        &mut self.authors
    }

    pub fn generate_id(&mut self) -> String {
        self.ids.next_id()
    }
}
