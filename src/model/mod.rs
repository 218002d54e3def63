//! Data models for the bookshelf.
//!
//! - [`Book`]: a book with an optional title and a weak author reference
//! - [`Author`]: a named, possibly verified author
//! - [`NewBook`], [`NewAuthor`]: creation inputs (no id yet)
//! - [`BookEdits`], [`AuthorEdits`]: partial updates

mod author;
mod book;

pub use author::{Author, AuthorEdits, NewAuthor};
pub use book::{Book, BookEdits, NewBook};

/// An entity stored in a collection and addressed by its id.
pub trait Record {
    fn id(&self) -> &str;
}
