//! Response envelope: `{"message": ..., "data"?: ...}` for every endpoint, success or failure.

use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn message_only(message: &'static str) -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::OK, Json(Envelope { message, data: None }))
}

pub fn with_data<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message,
            data: Some(data),
        }),
    )
}

/// A failed request. Only `message` reaches the client; `cause` is logged.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub cause: Option<AppError>,
}

impl ApiError {
    /// Client-facing rejection with no underlying fault.
    pub fn reject(status: StatusCode, message: &'static str) -> Self {
        ApiError {
            status,
            message,
            cause: None,
        }
    }

    pub fn failed(status: StatusCode, message: &'static str, cause: AppError) -> Self {
        ApiError {
            status,
            message,
            cause: Some(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.cause {
            Some(cause) => tracing::warn!(
                status = self.status.as_u16(),
                error = %cause,
                "{}",
                self.message
            ),
            None => tracing::debug!(status = self.status.as_u16(), "{}", self.message),
        }
        let body = Envelope::<()> {
            message: self.message,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}
