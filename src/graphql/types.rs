use async_graphql::{Context, ID, InputObject, MaybeUndefined, Object};

use super::library;
use crate::model::{self, Author as ModelAuthor, Book as ModelBook};

/// A book. `author` is resolved on demand from the author collection.
pub struct Book(pub ModelBook);

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> Option<String> {
        self.0.title.clone()
    }

    /// Author of the book
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(library.resolve_book_author(&self.0).map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Book(b)
    }
}

/// An author. `books` is resolved on demand from the book collection.
pub struct Author(pub ModelAuthor);

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn first_name(&self) -> &str {
        &self.0.first_name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn verified(&self) -> bool {
        self.0.verified
    }

    /// List of books of the author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = library(ctx)?;
        Ok(library
            .resolve_author_books(&self.0)
            .into_iter()
            .map(Book::from)
            .collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Author(a)
    }
}

#[derive(InputObject)]
pub struct AddBookInput {
    pub title: String,
    #[graphql(name = "author_id")]
    pub author_id: Option<String>,
}

impl From<AddBookInput> for model::NewBook {
    fn from(input: AddBookInput) -> Self {
        model::NewBook {
            title: input.title,
            author_id: input.author_id,
        }
    }
}

/// Omitted fields are left unchanged; an explicit null clears the field.
#[derive(InputObject)]
pub struct UpdateBookInput {
    pub title: MaybeUndefined<String>,
    #[graphql(name = "author_id")]
    pub author_id: MaybeUndefined<String>,
}

fn presence<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

impl From<UpdateBookInput> for model::BookEdits {
    fn from(input: UpdateBookInput) -> Self {
        model::BookEdits {
            title: presence(input.title),
            author_id: presence(input.author_id),
        }
    }
}

#[derive(InputObject)]
pub struct AddAuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub verified: bool,
}

impl From<AddAuthorInput> for model::NewAuthor {
    fn from(input: AddAuthorInput) -> Self {
        model::NewAuthor {
            first_name: input.first_name,
            last_name: input.last_name,
            verified: input.verified,
        }
    }
}

/// Omitted or null fields are left unchanged.
#[derive(InputObject)]
pub struct UpdateAuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verified: Option<bool>,
}

impl From<UpdateAuthorInput> for model::AuthorEdits {
    fn from(input: UpdateAuthorInput) -> Self {
        model::AuthorEdits {
            first_name: input.first_name,
            last_name: input.last_name,
            verified: input.verified,
        }
    }
}
