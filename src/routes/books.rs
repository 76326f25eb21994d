//! Book routes under `/api`, plus the cross-origin and request-tracing layers.

use crate::handlers::books::{
    create_book, delete_book, get_book, list_all_books, list_books_page,
};
use crate::state::AppState;
use axum::{
    http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/create_books", post(create_book))
        .route("/delete_book/:id", delete(delete_book))
        .route("/get_books/:id", get(get_book))
        .route("/books", get(list_books_page))
        .route("/books_all", get(list_all_books))
        .with_state(state)
}

/// Any origin, with the request headers browsers send for JSON calls.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT, AUTHORIZATION])
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", book_routes(state))
        .layer(cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
}
