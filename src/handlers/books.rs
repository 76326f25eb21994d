//! Book handlers: create, delete, list (all or one page), read by id.

use crate::error::AppError;
use crate::model::{BookId, CreateBook};
use crate::response::{message_only, with_data, ApiError};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Path segments that axum cannot decode are reported like any other unusable key.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(id_str)| id_str)
        .map_err(|rejection| AppError::InvalidId(rejection.body_text()))
}

fn parse_id(id_str: &str) -> Result<BookId, AppError> {
    id_str
        .parse::<BookId>()
        .map_err(|_| AppError::InvalidId(id_str.to_string()))
}

/// 1-based page number and page size taken from the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Absent, non-numeric, or non-positive values fall back to their defaults. Values are
    /// parsed as sent, so surrounding whitespace makes them non-numeric.
    pub fn from_params(params: &HashMap<String, String>, max_limit: Option<i64>) -> Self {
        let positive = |key: &str, default: i64| {
            params
                .get(key)
                .and_then(|v| v.parse::<i64>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };
        let page = positive("page", DEFAULT_PAGE);
        let mut limit = positive("limit", DEFAULT_LIMIT);
        if let Some(max) = max_limit {
            limit = limit.min(max);
        }
        PageRequest { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// POST /api/create_books
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<CreateBook>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let Json(payload) = body.map_err(|rejection| {
        ApiError::failed(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Request failed",
            AppError::Parse(rejection.body_text()),
        )
    })?;
    let book = payload
        .validate()
        .ok_or_else(|| ApiError::reject(StatusCode::BAD_REQUEST, "Invalid book data"))?;
    let created = state
        .store
        .create(book)
        .await
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not create book", e))?;
    tracing::info!(id = created.id, "book created");
    Ok(message_only("Book has been added"))
}

/// DELETE /api/delete_book/:id
pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let id_str = path_id(path)
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not delete book", e))?;
    if id_str.is_empty() {
        return Err(ApiError::reject(StatusCode::BAD_REQUEST, "ID cannot be empty"));
    }
    let id = parse_id(&id_str)
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not delete book", e))?;
    let affected = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not delete book", e))?;
    if affected == 0 {
        return Err(ApiError::reject(StatusCode::NOT_FOUND, "Book not found"));
    }
    tracing::info!(id, "book deleted");
    Ok(message_only("Book deleted successfully"))
}

/// GET /api/books_all
pub async fn list_all_books(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let books = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not get books", e))?;
    Ok(with_data("Books fetched successfully", books))
}

/// GET /api/books?page=&limit=
pub async fn list_books_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let page = PageRequest::from_params(&params, state.max_page_limit);
    let books = state
        .store
        .list_page(page.limit, page.offset())
        .await
        .map_err(|e| ApiError::failed(StatusCode::BAD_REQUEST, "Could not get books", e))?;
    Ok(with_data("Books fetched successfully", books))
}

/// GET /api/get_books/:id
///
/// An empty id answers 500 here but 400 on delete; both statuses are kept as clients see them.
pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let lookup_failed =
        |e: AppError| ApiError::failed(StatusCode::BAD_REQUEST, "Could not get the book", e);
    let id_str = path_id(path).map_err(lookup_failed)?;
    if id_str.is_empty() {
        return Err(ApiError::reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            "ID cannot be empty",
        ));
    }
    let id = parse_id(&id_str).map_err(lookup_failed)?;
    let book = state
        .store
        .get(id)
        .await
        .map_err(lookup_failed)?
        .ok_or_else(|| lookup_failed(AppError::NotFound(id_str)))?;
    Ok(with_data("Book ID fetched successfully", book))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookStore;
    use axum::response::{IntoResponse, Response};
    use std::sync::Arc;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    async fn message_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["message"].as_str().unwrap().to_string()
    }

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryBookStore::new()))
    }

    #[test]
    fn page_defaults() {
        let p = PageRequest::from_params(&params(&[]), None);
        assert_eq!(p, PageRequest { page: 1, limit: 10 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn page_offset_from_page_and_limit() {
        let p = PageRequest::from_params(&params(&[("page", "3"), ("limit", "25")]), None);
        assert_eq!(p.offset(), 50);
        let p = PageRequest::from_params(&params(&[("page", "2")]), None);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn non_numeric_and_non_positive_values_use_defaults() {
        let p = PageRequest::from_params(&params(&[("page", "two"), ("limit", "many")]), None);
        assert_eq!(p, PageRequest::default());
        let p = PageRequest::from_params(&params(&[("page", "0"), ("limit", "-5")]), None);
        assert_eq!(p, PageRequest::default());
    }

    #[test]
    fn padded_values_are_not_numeric() {
        let p = PageRequest::from_params(&params(&[("page", " 2"), ("limit", "5 ")]), None);
        assert_eq!(p, PageRequest::default());
    }

    #[test]
    fn limit_is_unbounded_unless_capped() {
        let p = PageRequest::from_params(&params(&[("limit", "100000")]), None);
        assert_eq!(p.limit, 100_000);
        let p = PageRequest::from_params(&params(&[("limit", "100000")]), Some(500));
        assert_eq!(p.limit, 500);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let max = i64::MAX.to_string();
        let p = PageRequest::from_params(&params(&[("page", max.as_str()), ("limit", "1000")]), None);
        assert_eq!(p.offset(), i64::MAX);
    }

    #[tokio::test]
    async fn empty_id_on_delete_is_a_client_error() {
        let response = delete_book(State(state()), Ok(Path(String::new())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message_of(response).await, "ID cannot be empty");
    }

    #[tokio::test]
    async fn empty_id_on_get_is_a_server_error() {
        let response = get_book(State(state()), Ok(Path(String::new())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_of(response).await, "ID cannot be empty");
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_storage_rejection() {
        let response = delete_book(State(state()), Ok(Path("abc".into())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message_of(response).await, "Could not delete book");

        let response = get_book(State(state()), Ok(Path("abc".into())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message_of(response).await, "Could not get the book");
    }
}
