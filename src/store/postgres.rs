//! PostgreSQL-backed store and the connection pool it runs on.

use crate::config::StorageConfig;
use crate::error::AppError;
use crate::model::{Book, BookId, NewBook};
use crate::store::BookStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

const INSERT_BOOK: &str =
    "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3) RETURNING id, author, title, publisher";
const DELETE_BOOK: &str = "DELETE FROM books WHERE id = $1";
const SELECT_BOOKS: &str = "SELECT id, author, title, publisher FROM books";
const SELECT_BOOKS_PAGE: &str = "SELECT id, author, title, publisher FROM books LIMIT $1 OFFSET $2";
const SELECT_BOOK: &str = "SELECT id, author, title, publisher FROM books WHERE id = $1";

/// Open a pool against the configured database. Fails if the first connection cannot be made.
pub async fn connect(config: &StorageConfig) -> Result<PgPool, AppError> {
    let opts = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(config.ssl_mode);
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
        .map_err(AppError::Connection)
}

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookStore { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, AppError> {
        tracing::debug!(sql = %INSERT_BOOK, "query");
        let row = sqlx::query_as::<_, Book>(INSERT_BOOK)
            .bind(&book.author)
            .bind(&book.title)
            .bind(&book.publisher)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: BookId) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_BOOK, id, "query");
        let result = sqlx::query(DELETE_BOOK).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %SELECT_BOOKS, "query");
        let rows = sqlx::query_as::<_, Book>(SELECT_BOOKS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %SELECT_BOOKS_PAGE, limit, offset, "query");
        let rows = sqlx::query_as::<_, Book>(SELECT_BOOKS_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, AppError> {
        tracing::debug!(sql = %SELECT_BOOK, id, "query");
        let row = sqlx::query_as::<_, Book>(SELECT_BOOK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
