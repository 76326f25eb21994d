//! Book persistence: the `BookStore` seam, its PostgreSQL implementation, and an in-memory fake.

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::{connect, PgBookStore};

use crate::error::AppError;
use crate::model::{Book, BookId, NewBook};
use async_trait::async_trait;

/// Storage operations behind the book handlers. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a row; the store assigns the id.
    async fn create(&self, book: NewBook) -> Result<Book, AppError>;

    /// Delete by id. Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: BookId) -> Result<u64, AppError>;

    async fn list_all(&self) -> Result<Vec<Book>, AppError>;

    /// At most `limit` rows after skipping `offset`, in the store's natural order.
    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Book>, AppError>;

    async fn get(&self, id: BookId) -> Result<Option<Book>, AppError>;
}
