use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use catalog_core::{DomainError, FieldError, ItemIdParseError, ValidationErrors};

pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Error returned by every handler; rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 422 with the field-level error list.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Item not found")]
    ItemNotFound,

    /// No route matched.
    #[error("Not Found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::NotFound => ApiError::ItemNotFound,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// A non-integer path id is a validation error; an integer no item can carry
/// is simply not found.
impl From<ItemIdParseError> for ApiError {
    fn from(err: ItemIdParseError) -> Self {
        match err {
            ItemIdParseError::NotInteger(raw) => ApiError::Validation(ValidationErrors::single(
                FieldError::int_parsing(&["path", "item_id"], &raw),
            )),
            ItemIdParseError::OutOfRange(_) => ApiError::ItemNotFound,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationErrors::single(FieldError::json_invalid(
            rejection.body_text(),
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(ValidationErrors::single(FieldError::new(
            &["query"],
            "query_invalid",
            rejection.body_text(),
            None,
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                tracing::debug!(%errors, "request failed validation");
                json_detail(StatusCode::UNPROCESSABLE_ENTITY, errors)
            }
            ApiError::ItemNotFound => json_detail(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
            ApiError::RouteNotFound => json_detail(StatusCode::NOT_FOUND, "Not Found"),
            ApiError::MethodNotAllowed => {
                json_detail(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
            }
        }
    }
}

pub fn json_detail(status: StatusCode, detail: impl Serialize) -> Response {
    (status, axum::Json(json!({ "detail": detail }))).into_response()
}
