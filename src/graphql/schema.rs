use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::library::Library;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Library) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(crate) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Library> {
    ctx.data::<Library>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All books, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = library(ctx)?;
        Ok(library.list_books().into_iter().map(Book::from).collect())
    }

    /// A single book by ID, or null
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(library.get_book(&id).map(Book::from))
    }

    /// All authors, in insertion order
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let library = library(ctx)?;
        Ok(library.list_authors().into_iter().map(Author::from).collect())
    }

    /// A single author by ID, or null
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(library.get_author(&id).map(Author::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a book
    async fn add_book(&self, ctx: &Context<'_>, book: AddBookInput) -> async_graphql::Result<Book> {
        let library = library(ctx)?;
        Ok(library.add_book(book.into()).into())
    }

    /// Delete a book and return the books that remain
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Vec<Book>> {
        let library = library(ctx)?;
        Ok(library.delete_book(&id).into_iter().map(Book::from).collect())
    }

    /// Update the given fields of a book, or return null if it does not exist
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: UpdateBookInput,
    ) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(library.update_book(&id, edits.into()).map(Book::from))
    }

    /// Create an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        author: AddAuthorInput,
    ) -> async_graphql::Result<Author> {
        let library = library(ctx)?;
        Ok(library.add_author(author.into()).into())
    }

    /// Delete an author and return the authors that remain
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Vec<Author>> {
        let library = library(ctx)?;
        Ok(library
            .delete_author(&id)
            .into_iter()
            .map(Author::from)
            .collect())
    }

    /// Update the given fields of an author, or return null if it does not exist
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: UpdateAuthorInput,
    ) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(library.update_author(&id, edits.into()).map(Author::from))
    }
}
