use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{Message, StatusMessage};
use models::FieldViolation;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const MENU_ITEM_NOT_FOUND: &str = "Menu item not found";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Error returned by every menu handler; each variant has a fixed wire shape.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with the full violation list.
    Validation(Vec<FieldViolation>),
    /// 404 for an id that does not exist or does not parse.
    NotFound,
    /// 404 for a path or method no route serves.
    EndpointNotFound,
    /// 500; the detail is logged and never sent.
    Internal(String),
}

#[derive(Serialize)]
struct ValidationBody {
    status: u16,
    errors: Vec<FieldViolation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                (status, Json(ValidationBody { status: status.as_u16(), errors })).into_response()
            }
            ApiError::NotFound => not_found(MENU_ITEM_NOT_FOUND),
            ApiError::EndpointNotFound => not_found(ENDPOINT_NOT_FOUND),
            ApiError::Internal(detail) => {
                error!(error = %detail, "internal error while handling request");
                internal_error()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(violations) => ApiError::Validation(violations),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

fn not_found(message: &'static str) -> Response {
    let status = StatusCode::NOT_FOUND;
    (status, Json(StatusMessage { status: status.as_u16(), message })).into_response()
}

fn internal_error() -> Response {
    let body = Json(Message { message: INTERNAL_SERVER_ERROR });
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

/// Turns a handler panic into the generic 500 body, logging the payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(error = %detail, "handler panicked");
    internal_error()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
