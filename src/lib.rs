//! Books API: JSON CRUD over a single `books` table in PostgreSQL.

pub mod config;
pub mod error;
pub mod migration;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod handlers;
pub mod routes;

pub use config::{load_settings, Settings, ServerConfig, StorageConfig};
pub use error::{AppError, ConfigError};
pub use migration::ensure_books_table;
pub use model::{Book, BookId, NewBook};
pub use response::{ApiError, Envelope};
pub use state::AppState;
pub use store::{connect, BookStore, MemoryBookStore, PgBookStore};
pub use routes::{app, book_routes};
