//! # Bookshelf - an in-memory books and authors API
//!
//! Two related collections, books and authors, exposed through a typed
//! query/mutation interface. A book refers to its author by id; the join is
//! computed on demand and a dangling reference is allowed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve GraphQL (and GraphiQL) on http://127.0.0.1:4000
//! bookshelf serve
//!
//! # One-off query against a fresh seeded store
//! bookshelf query '{ books { id title author { lastName } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`library`]: Queries, mutations and joins over the store
//! - [`model`]: Data models (Book, Author and their inputs)
//! - [`store`]: In-memory collections and id generation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and its axum transport.
pub mod graphql;

/// The resolution layer: one locked store behind a clonable handle.
pub mod library;

/// Data models for books and authors.
pub mod model;

/// In-memory storage layer.
pub mod store;

pub mod logging;
