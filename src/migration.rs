//! Schema setup for the `books` table. Safe to run on every startup.

use crate::error::AppError;
use sqlx::PgPool;

pub const BOOKS_TABLE: &str = "books";

/// Nullable text columns every books table must carry.
const TEXT_COLUMNS: &[&str] = &["author", "title", "publisher"];

fn create_table_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            author TEXT,
            title TEXT,
            publisher TEXT
        )
        "#,
        BOOKS_TABLE
    )
}

fn add_column_ddl(column: &str) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} TEXT",
        BOOKS_TABLE, column
    )
}

/// Create the books table if absent, then add any text column a pre-existing table lacks.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&create_table_ddl())
        .execute(pool)
        .await
        .map_err(AppError::Migration)?;
    for column in TEXT_COLUMNS {
        sqlx::query(&add_column_ddl(column))
            .execute(pool)
            .await
            .map_err(AppError::Migration)?;
    }
    tracing::info!(table = BOOKS_TABLE, "schema ready");
    Ok(())
}
