//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 4000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { id title author { firstName } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addBook(book: { title: "The Storm" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `book`, `authors`, `author`
//! - **Mutations**: `addBook`, `deleteBook`, `updateBook`, `addAuthor`,
//!   `deleteAuthor`, `updateAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;

use schema::library;
