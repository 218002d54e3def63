mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use anyhow::Result;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::library::Library;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub library: Library,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        let library = Library::from_settings(&config.store);
        Self { config, library }
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(self.library.clone())
    }
}

/// Run one GraphQL request and return the pretty-printed JSON response.
pub(crate) fn execute(
    schema: &BookshelfSchema,
    query: &str,
    variables: Option<String>,
) -> Result<String> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::warn!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    Ok(serde_json::to_string_pretty(&response)?)
}
