//! Server: loads settings, connects, ensures the books table, serves the API on port 8080.

use books_api::{
    app, connect, ensure_books_table, load_settings, AppError, AppState, PgBookStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("books_api=info,tower_http=info")),
        )
        .init();

    let settings = load_settings().map_err(|e| {
        tracing::error!("invalid configuration: {}", e);
        AppError::from(e)
    })?;

    let pool = connect(&settings.storage).await.map_err(|e| {
        tracing::error!("could not load the database: {}", e);
        e
    })?;
    ensure_books_table(&pool).await.map_err(|e| {
        tracing::error!("could not migrate the database: {}", e);
        e
    })?;

    let state = AppState::new(Arc::new(PgBookStore::new(pool)))
        .with_max_page_limit(settings.server.max_page_limit);

    let listener = TcpListener::bind(settings.server.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
