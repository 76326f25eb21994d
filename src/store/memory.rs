//! In-memory `BookStore` for tests and local runs without a database.

use crate::error::AppError;
use crate::model::{Book, BookId, NewBook};
use crate::store::BookStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    last_id: BookId,
    books: Vec<Book>,
}

/// Ids start at 1 and are never reused. Rows come back in insertion order.
#[derive(Default)]
pub struct MemoryBookStore {
    rows: RwLock<Rows>,
    unavailable: AtomicBool,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every operation fails as if the database connection were gone.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, AppError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let book = book.into_book(rows.last_id);
        rows.books.push(book.clone());
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<u64, AppError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        let before = rows.books.len();
        rows.books.retain(|b| b.id != id);
        Ok((before - rows.books.len()) as u64)
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        self.check_available()?;
        Ok(self.rows.read().await.books.clone())
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Book>, AppError> {
        self.check_available()?;
        let rows = self.rows.read().await;
        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(rows.books.iter().skip(skip).take(take).cloned().collect())
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, AppError> {
        self.check_available()?;
        Ok(self.rows.read().await.books.iter().find(|b| b.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(n: usize) -> NewBook {
        NewBook {
            author: format!("author {}", n),
            title: format!("title {}", n),
            publisher: format!("publisher {}", n),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryBookStore::new();
        let a = store.create(new_book(1)).await.unwrap();
        let b = store.create(new_book(2)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.delete(b.id).await.unwrap(), 1);
        let c = store.create(new_book(3)).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn delete_missing_affects_nothing() {
        let store = MemoryBookStore::new();
        assert_eq!(store.delete(42).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn page_skips_and_takes() {
        let store = MemoryBookStore::new();
        for n in 0..25 {
            store.create(new_book(n)).await.unwrap();
        }
        let page = store.list_page(10, 20).await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, 21);
        assert!(store.list_page(10, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryBookStore::new();
        store.set_unavailable(true);
        assert!(store.list_all().await.is_err());
        assert!(store.create(new_book(1)).await.is_err());
        store.set_unavailable(false);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
