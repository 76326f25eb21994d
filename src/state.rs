//! Shared application state for the book routes.

use crate::store::BookStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
    /// Clamp for the `limit` query parameter on paginated listing. `None` means unbounded.
    pub max_page_limit: Option<i64>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        AppState {
            store,
            max_page_limit: None,
        }
    }

    pub fn with_max_page_limit(mut self, max_page_limit: Option<i64>) -> Self {
        self.max_page_limit = max_page_limit;
        self
    }
}
