use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use tokio::net::TcpListener;

use super::BookshelfSchema;
use crate::error::{BookshelfError, Result};

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `GET /` serves GraphiQL, `POST /` executes GraphQL requests.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

pub async fn run_server(schema: BookshelfSchema, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BookshelfError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, "GraphQL server listening");

    serve(listener, schema).await
}

/// Serve the schema on an already bound listener until it shuts down.
pub async fn serve(listener: TcpListener, schema: BookshelfSchema) -> Result<()> {
    axum::serve(listener, router(schema)).await?;
    Ok(())
}
